//! Site configuration management for `sidra.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── nav        # [nav] sidebar tree
//! │   ├── serve      # [serve]
//! │   ├── site       # [site] info, logo, social
//! │   └── theme      # [theme] css, pagination, toc
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                      |
//! |-----------------|----------------------------------------------|
//! | `[site.info]`   | Site metadata (title, description, url, base)|
//! | `[site.logo]`   | Favicon and logo                             |
//! | `[[site.social]]`| Social links                                |
//! | `[nav]`         | Sidebar navigation tree                      |
//! | `[theme]`       | Custom CSS, pagination, table of contents    |
//! | `[serve]`       | Development server pass-through (port, host) |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_path};

// Re-export from section/
pub use section::{
    HostAddr, NavConfig, ServeConfig, SidebarEntry, SidebarStats, SiteSectionConfig,
    ThemeSectionConfig, TocConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sidra.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (info, logo, social)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Sidebar navigation tree
    #[serde(default)]
    pub nav: NavConfig,

    /// Theming hooks (css, pagination, toc)
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Development server pass-through
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is determined by the config file's parent
    /// directory. Any structural or validation error aborts the load; there
    /// is no partial construction.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'sidra init' to create a new site config.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths, derive the base path
        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
            debug!("config"; "loaded {}", config.config_path.display());
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.root = normalize_path(&root);
        self.config_path = normalize_path(&self.config_path);
        self.sync_base_from_url();
    }

    /// Derive `site.info.base` from `site.info.url`.
    ///
    /// An explicit base wins over the URL path; either way the stored base
    /// has no trailing slash, so consumers can join slugs onto it directly.
    fn sync_base_from_url(&mut self) {
        match self.site.info.base.take() {
            Some(base) => self.site.info.base = Some(util::normalize_base(&base)),
            None => {
                if let Some(url) = &self.site.info.url {
                    self.site.info.base = util::base_from_url(url);
                }
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (sidra.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.collect_diagnostics()
            .into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator, gathering diagnostics.
    fn collect_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.nav.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.serve.validate(&mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"Handbook\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert!(config.nav.sidebar.is_empty());
        assert!(config.theme.pagination);
        assert_eq!(config.serve.port, 4321);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.info.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_full_config_mirrors_input() {
        let config = test_parse_config(
            r#"description = "Team handbook and API guides"
url = "https://example.github.io/handbook/"

[site.logo]
favicon = "favicon.png"
src = "assets/logo.png"
alt = "Handbook logo"

[[site.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/example/handbook"

[nav]
sidebar = [
    { label = "Introduction", items = [
        "introduction/overview",
        "introduction/getting-started",
    ] },
    { label = "How-To Guides", items = ["howto/first-steps"] },
]

[theme]
custom_css = ["styles/custom.css"]
pagination = true

[theme.toc]
min_heading_level = 2
max_heading_level = 4

[serve]
port = 4321
host = true
"#,
        );

        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.description, "Team handbook and API guides");
        assert_eq!(
            config.site.info.url.as_deref(),
            Some("https://example.github.io/handbook/")
        );
        assert_eq!(config.site.social.len(), 1);
        assert_eq!(config.nav.sidebar.len(), 2);
        assert_eq!(config.theme.custom_css.len(), 1);
        assert_eq!(config.theme.toc.max_heading_level, 4);
        assert_eq!(config.serve.port, 4321);
        assert_eq!(config.serve.host, HostAddr::Flag(true));

        // Everything above passes validation
        assert!(config.collect_diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostics_aggregated_across_sections() {
        let mut config = test_parse_config(
            "[theme.toc]\nmin_heading_level = 4\nmax_heading_level = 2",
        );
        config.site.info.title.clear();

        let diag = config.collect_diagnostics();
        assert_eq!(diag.len(), 2);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"site.info.title"));
        assert!(fields.contains(&"theme.toc.min_heading_level"));
    }

    #[test]
    fn test_base_derived_from_url() {
        let mut config = test_parse_config("url = \"https://example.github.io/handbook/\"");
        config.sync_base_from_url();
        assert_eq!(config.site.info.base.as_deref(), Some("/handbook"));
    }

    #[test]
    fn test_explicit_base_wins_and_is_normalized() {
        let mut config = test_parse_config(
            "url = \"https://example.github.io/handbook/\"\nbase = \"/docs/\"",
        );
        config.sync_base_from_url();
        assert_eq!(config.site.info.base.as_deref(), Some("/docs"));
    }

    #[test]
    fn test_base_absent_without_url_path() {
        let mut config = test_parse_config("url = \"https://docs.example.com\"");
        config.sync_base_from_url();
        assert_eq!(config.site.info.base, None);
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("sidra.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[site.info]\ntitle = \"Handbook\"").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.info.title, "Handbook");

        // Missing file surfaces as an IO error naming the path
        let err = SiteConfig::from_path(&temp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
