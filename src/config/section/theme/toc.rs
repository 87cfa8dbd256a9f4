//! `[theme.toc]` table-of-contents configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Table of contents settings.
///
/// Heading levels follow HTML: 1 is `<h1>`, 6 is `<h6>`.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.toc")]
pub struct TocConfig {
    /// Render a table of contents on each page.
    #[config(inline_doc)]
    pub enable: bool,

    /// Smallest heading level included.
    #[config(inline_doc)]
    pub min_heading_level: u8,

    /// Largest heading level included.
    #[config(inline_doc)]
    pub max_heading_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enable: true,
            min_heading_level: 2,
            max_heading_level: 3,
        }
    }
}

impl TocConfig {
    /// Validate heading-level bounds.
    ///
    /// # Checks
    /// - Both levels in 1..=6
    /// - `min_heading_level <= max_heading_level`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut bounds_ok = true;

        if !(1..=6).contains(&self.min_heading_level) {
            diag.error_with_hint(
                Self::FIELDS.min_heading_level,
                format!("level {} out of range", self.min_heading_level),
                "heading levels go from 1 to 6",
            );
            bounds_ok = false;
        }

        if !(1..=6).contains(&self.max_heading_level) {
            diag.error_with_hint(
                Self::FIELDS.max_heading_level,
                format!("level {} out of range", self.max_heading_level),
                "heading levels go from 1 to 6",
            );
            bounds_ok = false;
        }

        // Only meaningful when both bounds are valid on their own
        if bounds_ok && self.min_heading_level > self.max_heading_level {
            diag.error_with_hint(
                Self::FIELDS.min_heading_level,
                format!(
                    "min_heading_level ({}) is greater than max_heading_level ({})",
                    self.min_heading_level, self.max_heading_level
                ),
                "swap the two values or widen the range",
            );
        }
    }
}
