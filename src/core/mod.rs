//! Core domain types shared across config, sidebar, and check.

mod link;
mod url;

pub use link::{LinkTarget, LinkTargetError};
pub use url::{doc_url, docs_root_url, join_base};
