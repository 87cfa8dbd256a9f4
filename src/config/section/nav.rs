//! `[nav]` section configuration - the sidebar navigation tree.
//!
//! The sidebar is an ordered tree. Each entry is either a bare content
//! slug, a labeled link, or a group with ordered children. Order is
//! display-significant and preserved exactly as written.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! sidebar = [
//!     { label = "Introduction", items = [
//!         "introduction/overview",
//!         "introduction/getting-started",
//!     ] },
//!     { label = "Reference", collapsed = true, items = [
//!         "reference/cli",
//!         { label = "Issue Tracker", link = "https://github.com/sidra-docs/sidra/issues" },
//!     ] },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Sidebar navigation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "nav")]
pub struct NavConfig {
    /// Sidebar entries in display order. Empty means no sidebar.
    #[config(hidden)]
    pub sidebar: Vec<SidebarEntry>,
}

impl NavConfig {
    /// Validate the whole tree, reporting every malformed entry.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (index, entry) in self.sidebar.iter().enumerate() {
            entry.validate(&EntryLocation::root(index), diag);
        }
    }

    /// Collect tree statistics (used by `sidra check`).
    pub fn stats(&self) -> SidebarStats {
        SidebarStats::collect(&self.sidebar)
    }
}

// ============================================================================
// Sidebar Entry
// ============================================================================

/// A node in the sidebar tree.
///
/// Leaves reference content slugs resolved by the rendering framework;
/// sidra only checks their shape. Labels need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Bare content slug, e.g. `"introduction/overview"`.
    Slug(String),

    /// Group with ordered children, nesting to arbitrary depth.
    Group {
        label: String,
        #[serde(default)]
        collapsed: bool,
        items: Vec<SidebarEntry>,
    },

    /// Labeled link to a content slug or an external URL.
    Link { label: String, link: String },
}

impl SidebarEntry {
    /// True for slug and link entries.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Group { .. })
    }

    /// Display label, if the entry carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Slug(_) => None,
            Self::Group { label, .. } | Self::Link { label, .. } => Some(label),
        }
    }

    fn validate(&self, location: &EntryLocation<'_>, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Slug(slug) => validate_slug(slug, location, diag),
            Self::Link { label, link } => {
                if label.is_empty() {
                    diag.error(
                        NavConfig::FIELDS.sidebar,
                        format!("{location}: link label must not be empty"),
                    );
                }
                if link.is_empty() {
                    diag.error(
                        NavConfig::FIELDS.sidebar,
                        format!("{location}: link must not be empty"),
                    );
                } else if link.contains("://") {
                    validate_external_link(link, location, diag);
                } else {
                    validate_slug(link, location, diag);
                }
            }
            Self::Group {
                label,
                items,
                collapsed: _,
            } => {
                if label.is_empty() {
                    diag.error(
                        NavConfig::FIELDS.sidebar,
                        format!("{location}: group label must not be empty"),
                    );
                }
                for (index, item) in items.iter().enumerate() {
                    item.validate(&location.child(label, index), diag);
                }
            }
        }
    }
}

/// Check an external link is a well-formed http(s) URL.
fn validate_external_link(link: &str, location: &EntryLocation<'_>, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(link) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => {
            diag.error_with_hint(
                NavConfig::FIELDS.sidebar,
                format!(
                    "{location}: scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://example.com/page",
            );
        }
        Err(e) => {
            diag.error(
                NavConfig::FIELDS.sidebar,
                format!("{location}: invalid URL: {e}"),
            );
        }
    }
}

/// Check a content slug is well-shaped. Existence is resolved externally.
fn validate_slug(slug: &str, location: &EntryLocation<'_>, diag: &mut ConfigDiagnostics) {
    if slug.is_empty() {
        diag.error(
            NavConfig::FIELDS.sidebar,
            format!("{location}: slug must not be empty"),
        );
    } else if slug.starts_with('/') {
        diag.error_with_hint(
            NavConfig::FIELDS.sidebar,
            format!("{location}: slug '{slug}' must not start with '/'"),
            "slugs are relative to the content root, e.g. \"introduction/overview\"",
        );
    } else if slug.contains("://") {
        diag.error_with_hint(
            NavConfig::FIELDS.sidebar,
            format!("{location}: '{slug}' looks like a URL"),
            "use a labeled link: { label = \"...\", link = \"https://...\" }",
        );
    }
}

// ============================================================================
// Entry Location (Validation Helper)
// ============================================================================

/// Position of an entry in the tree, for diagnostics.
///
/// Renders as `entry 2` at the root, `entry 0 in 'SDKs > iOS'` when nested.
struct EntryLocation<'a> {
    trail: Vec<&'a str>,
    index: usize,
}

impl<'a> EntryLocation<'a> {
    fn root(index: usize) -> Self {
        Self {
            trail: Vec::new(),
            index,
        }
    }

    fn child(&self, group_label: &'a str, index: usize) -> Self {
        let mut trail = self.trail.clone();
        trail.push(group_label);
        Self { trail, index }
    }
}

impl std::fmt::Display for EntryLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry {}", self.index)?;
        if !self.trail.is_empty() {
            write!(f, " in '{}'", self.trail.join(" > "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Sidebar Stats
// ============================================================================

/// Tree statistics for the `check` summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarStats {
    /// Number of groups at any depth.
    pub groups: usize,
    /// Number of leaves (slugs and links) at any depth.
    pub pages: usize,
    /// Deepest nesting level; 0 for an empty sidebar, 1 for a flat list.
    pub max_depth: usize,
}

impl SidebarStats {
    pub fn collect(entries: &[SidebarEntry]) -> Self {
        let mut stats = Self::default();
        stats.walk(entries, 1);
        stats
    }

    fn walk(&mut self, entries: &[SidebarEntry], depth: usize) {
        for entry in entries {
            self.max_depth = self.max_depth.max(depth);
            match entry {
                SidebarEntry::Group { items, .. } => {
                    self.groups += 1;
                    self.walk(items, depth + 1);
                }
                SidebarEntry::Slug(_) | SidebarEntry::Link { .. } => self.pages += 1,
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
