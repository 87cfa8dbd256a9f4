//! `[theme]` section configuration.
//!
//! Theming hooks passed to the rendering framework: extra stylesheets,
//! pagination links, and table-of-contents bounds.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = ["styles/custom.css"]
//! pagination = true
//!
//! [theme.toc]
//! min_heading_level = 2
//! max_heading_level = 4
//! ```

mod toc;

pub use toc::TocConfig;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Theme section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Extra stylesheets applied after the default theme, in order
    /// (relative to the site root).
    pub custom_css: Vec<PathBuf>,

    /// Show previous/next page links at the bottom of each page.
    #[config(inline_doc)]
    pub pagination: bool,

    /// Table of contents settings.
    #[config(sub)]
    pub toc: TocConfig,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            custom_css: Vec::new(),
            pagination: true,
            toc: TocConfig::default(),
        }
    }
}

impl ThemeSectionConfig {
    /// Validate theme settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.custom_css {
            if path.as_os_str().is_empty() {
                diag.error(Self::FIELDS.custom_css, "stylesheet path must not be empty");
            } else if path.is_absolute() {
                diag.error_with_hint(
                    Self::FIELDS.custom_css,
                    format!("stylesheet path '{}' must be relative", path.display()),
                    "paths are resolved against the site root, e.g. \"styles/custom.css\"",
                );
            }
        }

        self.toc.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.custom_css.is_empty());
        assert!(config.theme.pagination);
    }

    #[test]
    fn test_custom_css_order() {
        let config = test_parse_config(
            "[theme]\ncustom_css = [\"styles/fonts.css\", \"styles/custom.css\"]",
        );
        assert_eq!(config.theme.custom_css.len(), 2);
        assert_eq!(config.theme.custom_css[0], PathBuf::from("styles/fonts.css"));
        assert_eq!(
            config.theme.custom_css[1],
            PathBuf::from("styles/custom.css")
        );
    }

    #[test]
    fn test_pagination_disabled() {
        let config = test_parse_config("[theme]\npagination = false");
        assert!(!config.theme.pagination);
    }

    #[test]
    fn test_absolute_css_path_rejected() {
        let config = test_parse_config("[theme]\ncustom_css = [\"/etc/styles.css\"]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.custom_css");
    }

    #[test]
    fn test_empty_css_path_rejected() {
        let config = test_parse_config("[theme]\ncustom_css = [\"\"]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
