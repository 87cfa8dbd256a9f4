//! `[site.info]` configuration.
//!
//! Basic site information: title, description, deployment URL and base
//! path. These values are handed to the rendering framework as-is, with
//! the exception of `base`, which is derived from `url` when omitted.

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata exposed to the rendering framework.
/// For custom fields, use `[site.info.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title shown in the browser tab and sidebar header.
    #[config(inline_doc)]
    pub title: String,

    /// Site description used in meta tags.
    #[config(inline_doc)]
    pub description: String,

    /// Deployment URL (e.g., "https://example.github.io/handbook/").
    /// Its path component becomes the default `base`.
    pub url: Option<String>,

    /// Base path the site is served under (e.g., "/handbook").
    /// Defaults to the path component of `url`.
    pub base: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// Custom fields passed through to the rendering framework.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            base: None,
            language: "en".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - `base` must be an absolute path without a scheme
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "required field is missing or empty",
                "set site.info.title, e.g.: \"Handbook\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if let Some(base) = &self.base {
            if base.contains("://") {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    format!("'{base}' must be a path, not a URL"),
                    "use the path component only, e.g. \"/handbook\"",
                );
            } else if !base.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    format!("'{base}' must start with '/'"),
                    "e.g. \"/handbook\"",
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
        config.site.info.validate(&mut diag);
        diag
    }

    #[test]
    fn test_fields_mirror_input() {
        let config = test_parse_config(
            r#"[site.info.extra]
team = "growth""#,
        );
        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.language, "en");
        assert_eq!(
            config.site.info.extra.get("team"),
            Some(&toml::Value::String("growth".into()))
        );
    }

    #[test]
    fn test_missing_title_rejected() {
        let config: crate::config::SiteConfig =
            toml::from_str("[site.info]\ndescription = \"no title\"").unwrap();
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.info.title");
    }

    #[test]
    fn test_url_validation() {
        let config = test_parse_config("");
        assert!(validate(&config).is_empty());

        let mut config = test_parse_config("");
        config.site.info.url = Some("https://example.github.io/handbook/".into());
        assert!(validate(&config).is_empty());

        config.site.info.url = Some("ftp://example.com".into());
        assert_eq!(validate(&config).len(), 1);

        config.site.info.url = Some("not a url".into());
        assert_eq!(validate(&config).len(), 1);
    }

    #[test]
    fn test_base_validation() {
        let mut config = test_parse_config("");

        config.site.info.base = Some("/handbook".into());
        assert!(validate(&config).is_empty());

        config.site.info.base = Some("handbook".into());
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.info.base");

        config.site.info.base = Some("https://example.com/handbook".into());
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("not a URL"));
    }
}
