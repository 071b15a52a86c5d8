//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `build`  | `[build]`    | Docs directory, route base, sidebars   |
//! | `preset` | `[[preset]]` | Bundled docs/blog/theme wiring         |
//! | `site`   | `[site]`     | Site info, navbar, footer, link policy |

mod build;
mod preset;
pub mod site;

// Re-export section configs
pub use build::BuildConfig;
pub use preset::{BlogPresetConfig, DocsPresetConfig, PresetConfig, ThemePresetConfig};
pub use site::SiteSectionConfig;
