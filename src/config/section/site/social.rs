//! `[[site.social]]` social link entries.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// A social link shown in the site header.
///
/// All three fields are required; a missing one fails at parse time
/// with the offending key in the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "site.social")]
pub struct SocialLink {
    /// Icon name understood by the rendering framework (e.g., "github").
    pub icon: String,

    /// Accessible label for the link.
    pub label: String,

    /// Link target (http, https, or mailto).
    pub href: String,
}

impl SocialLink {
    /// Validate one entry. `index` identifies it in diagnostics.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.icon.is_empty() {
            diag.error(
                Self::FIELDS.icon,
                format!("entry {index}: icon must not be empty"),
            );
        }

        if self.label.is_empty() {
            diag.error(
                Self::FIELDS.label,
                format!("entry {index}: label must not be empty"),
            );
        }

        match url::Url::parse(&self.href) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "mailto") => {}
            Ok(parsed) => {
                diag.error_with_hint(
                    Self::FIELDS.href,
                    format!(
                        "entry {index}: scheme '{}' not supported, must be http, https or mailto",
                        parsed.scheme()
                    ),
                    "use format like https://github.com/example",
                );
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.href,
                    format!("entry {index}: invalid URL: {e}"),
                    "use format like https://github.com/example",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(config: &crate::config::SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        for (index, link) in config.site.social.iter().enumerate() {
            link.validate(index, &mut diag);
        }
        diag
    }

    #[test]
    fn test_social_links_order() {
        let config = test_parse_config(
            r#"[[site.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/example/handbook"

[[site.social]]
icon = "email"
label = "Contact"
href = "mailto:docs@example.com"
"#,
        );

        assert_eq!(config.site.social.len(), 2);
        assert_eq!(config.site.social[0].icon, "github");
        assert_eq!(config.site.social[1].icon, "email");
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_missing_key_fails_parse() {
        // href omitted - the parse error names the missing field
        let err = toml::from_str::<crate::config::SiteConfig>(
            "[[site.social]]\nicon = \"github\"\nlabel = \"GitHub\"",
        )
        .unwrap_err();
        assert!(err.to_string().contains("href"));
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let config = test_parse_config(
            "[[site.social]]\nicon = \"irc\"\nlabel = \"IRC\"\nhref = \"irc://irc.example.com\"",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.social.href");
    }

    #[test]
    fn test_empty_icon_and_label_rejected() {
        let config = test_parse_config(
            "[[site.social]]\nicon = \"\"\nlabel = \"\"\nhref = \"https://example.com\"",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 2);
    }
}
