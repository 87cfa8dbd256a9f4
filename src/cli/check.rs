//! Check command implementation.
//!
//! Validation itself happens during config load; reaching this point
//! means the configuration is structurally sound. `check` prints a short
//! summary so CI logs show what was accepted.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

/// Report a summary of the validated configuration.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let file = config.root_relative(&config.config_path);
    log!("check"; "{} ok", file.display());

    let stats = config.nav.stats();
    log!(
        "check";
        "sidebar: {}, {}, depth {}",
        plural_count(stats.groups, "group"),
        plural_count(stats.pages, "page"),
        stats.max_depth
    );

    let base = config.site.info.base.as_deref().unwrap_or("/");
    log!("check"; "base {}, serve port {}", base, config.serve.port);

    if config.serve.host.is_exposed() {
        log!("check"; "server exposed beyond localhost");
    }

    Ok(())
}

/// Format a count with a pluralized noun ("1 group", "3 pages").
fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
