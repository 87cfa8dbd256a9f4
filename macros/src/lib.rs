//! Proc macros for sidra.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata configuration.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the browser tab and sidebar header.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(hidden)]` - Hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(sub)]` - Nested section, template points at its own header
//! - `#[config(inline_doc)]` - Render single-line doc as inline comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `TocConfig` → `toc`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
