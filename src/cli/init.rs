//! Site config scaffolding.
//!
//! Creates a commented `sidra.toml` from the section templates generated
//! by the `Config` derive.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::config::section::site::{LogoConfig, SiteInfoConfig};
use crate::config::section::{ServeConfig, ThemeSectionConfig};
use crate::log;

/// Generate sidra.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Sidra configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/sidra-docs/sidra\n\n");

    // [site.info] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [site.logo] section
    out.push_str(&LogoConfig::template_with_header());
    out.push('\n');

    // [[site.social]] example (array of tables, written by hand)
    out.push_str("# Social links shown in the site header, in order.\n");
    out.push_str("# [[site.social]]\n");
    out.push_str("# icon = \"github\"\n");
    out.push_str("# label = \"GitHub\"\n");
    out.push_str("# href = \"https://github.com/example/project\"\n\n");

    // [nav] example (sidebar trees read better hand-written than generated)
    out.push_str("# Sidebar entries in display order. Empty means no sidebar.\n");
    out.push_str("[nav]\n");
    out.push_str("sidebar = [\n");
    out.push_str("    # { label = \"Introduction\", items = [\n");
    out.push_str("    #     \"introduction/overview\",\n");
    out.push_str("    #     \"introduction/getting-started\",\n");
    out.push_str("    # ] },\n");
    out.push_str("]\n\n");

    // [theme] section (includes [theme.toc])
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    // [serve] section
    out.push_str(&ServeConfig::template_with_header());

    out
}

/// Write default sidra.toml configuration
pub fn write_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Create a new site configuration
///
/// Refuses to overwrite an existing config file.
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let path = &config.config_path;
    if path.exists() {
        log!("error"; "'{}' already exists, refusing to overwrite", path.display());
        std::process::exit(1);
    }

    write_config(path)?;

    log!("init"; "created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site.info]"));
        assert!(template.contains("[site.logo]"));
        assert!(template.contains("[nav]"));
        assert!(template.contains("[theme]"));
        assert!(template.contains("[theme.toc]"));
        assert!(template.contains("[serve]"));
        assert!(template.contains("port = 4321"));
    }

    #[test]
    fn test_template_is_loadable() {
        // The scaffolded file must parse cleanly with no unknown fields
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {:?}", ignored);
        assert!(config.nav.sidebar.is_empty());
        assert_eq!(config.serve.port, 4321);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site").join("sidra.toml");
        write_config(&path).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[site.info]"));
        assert!(content.contains("[serve]"));
    }
}
