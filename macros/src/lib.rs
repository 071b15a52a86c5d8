//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors, a commented TOML template, and
//! field-status validation for configuration sections.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the browser tab.
//!     pub title: String,
//!
//!     /// Path prefix the site is served under.
//!     #[config(default = "/")]
//!     pub base_url: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub extra: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() -> TOML body with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! // - SiteInfoConfig::validate_field_status(&mut diag)
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(status = experimental)]` - status for the whole section
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS but hide from template
//! - `#[config(sub)]` - Nested Config section (template + status recurse)
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` - Render the doc comment after the value
//! - `#[config(status = experimental | deprecated | not_implemented)]`
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `NavbarConfig` → `navbar`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template(), and status validation.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
