//! `[site.logo]` favicon and logo configuration.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Image formats browsers accept as favicons.
const FAVICON_EXTENSIONS: &[&str] = &["ico", "gif", "jpg", "jpeg", "png", "svg", "webp"];

/// Favicon and logo settings, passed to the rendering framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.logo")]
pub struct LogoConfig {
    /// Favicon path (relative to the site root).
    pub favicon: Option<PathBuf>,

    /// Logo image shown next to the site title.
    pub src: Option<PathBuf>,

    /// Alt text for the logo image.
    #[config(inline_doc)]
    pub alt: String,

    /// Show the logo instead of the site title.
    #[config(inline_doc)]
    pub replace_title: bool,
}

impl LogoConfig {
    /// Validate favicon and logo references.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(favicon) = &self.favicon {
            self.validate_favicon(favicon, diag);
        }

        if let Some(src) = &self.src
            && src.as_os_str().is_empty()
        {
            diag.error(Self::FIELDS.src, "logo path must not be empty");
        }

        // alt without an image has nothing to describe
        if !self.alt.is_empty() && self.src.is_none() {
            diag.error_with_hint(
                Self::FIELDS.alt,
                "alt text is set but site.logo.src is not",
                "set site.logo.src to the logo image path",
            );
        }
    }

    fn validate_favicon(&self, favicon: &Path, diag: &mut ConfigDiagnostics) {
        if favicon.as_os_str().is_empty() {
            diag.error(Self::FIELDS.favicon, "favicon path must not be empty");
            return;
        }

        let known = favicon
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                FAVICON_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            });

        if !known {
            diag.error_with_hint(
                Self::FIELDS.favicon,
                format!("'{}' is not a supported favicon format", favicon.display()),
                format!("use one of: .{}", FAVICON_EXTENSIONS.join(", .")),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(config: &crate::config::SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.site.logo.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.site.logo.favicon.is_none());
        assert!(config.site.logo.src.is_none());
        assert!(config.site.logo.alt.is_empty());
        assert!(!config.site.logo.replace_title);
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_favicon_formats() {
        for name in ["favicon.png", "favicon.ico", "logo.SVG"] {
            let config = test_parse_config(&format!("[site.logo]\nfavicon = \"{name}\""));
            assert!(validate(&config).is_empty(), "{name} should be accepted");
        }

        let config = test_parse_config("[site.logo]\nfavicon = \"favicon.bmp\"");
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.logo.favicon");

        // No extension at all
        let config = test_parse_config("[site.logo]\nfavicon = \"favicon\"");
        assert_eq!(validate(&config).len(), 1);
    }

    #[test]
    fn test_logo_with_alt() {
        let config = test_parse_config(
            "[site.logo]\nsrc = \"assets/logo.png\"\nalt = \"Project logo\"\nreplace_title = true",
        );
        assert_eq!(config.site.logo.src, Some(PathBuf::from("assets/logo.png")));
        assert_eq!(config.site.logo.alt, "Project logo");
        assert!(config.site.logo.replace_title);
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_alt_without_src_rejected() {
        let config = test_parse_config("[site.logo]\nalt = \"dangling\"");
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.logo.alt");
    }
}
