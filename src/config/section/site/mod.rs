//! `[site]` section configuration.
//!
//! Contains site metadata, logo/favicon, and social links.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Handbook"
//! description = "Team handbook and API guides"
//! url = "https://example.github.io/handbook/"
//!
//! [site.logo]
//! favicon = "favicon.png"
//! src = "assets/logo.png"
//!
//! [[site.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example/handbook"
//! ```

mod info;
mod logo;
mod social;

pub use info::SiteInfoConfig;
pub use logo::LogoConfig;
pub use social::SocialLink;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site section configuration containing info, logo, and social links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, description, url, base).
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Favicon and logo settings.
    #[config(sub)]
    pub logo: LogoConfig,

    /// Social links shown in the site header, in order.
    #[config(hidden)]
    pub social: Vec<SocialLink>,
}

impl SiteSectionConfig {
    /// Validate info, logo, and every social entry.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        self.logo.validate(diag);
        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, diag);
        }
    }
}
