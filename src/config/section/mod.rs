//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sidra.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `nav`   | `[nav]`      | Sidebar navigation tree              |
//! | `serve` | `[serve]`    | Development server pass-through      |
//! | `site`  | `[site]`     | Site info, logo, social links        |
//! | `theme` | `[theme]`    | Custom CSS, pagination, toc          |

pub mod nav;
mod serve;
pub mod site;
pub mod theme;

// Re-export section configs
pub use nav::{NavConfig, SidebarEntry, SidebarStats};
pub use serve::{HostAddr, ServeConfig};
pub use site::SiteSectionConfig;
pub use theme::{ThemeSectionConfig, TocConfig};
