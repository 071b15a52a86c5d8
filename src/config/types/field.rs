//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site.info")]
/// pub struct SiteInfoConfig {
///     pub url: Option<String>,
/// }
///
/// // Generated:
/// impl SiteInfoConfig {
///     pub const FIELDS: SiteInfoConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    /// Path known at compile time, usable in `const` contexts.
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path built at runtime (e.g. per-sidebar locations).
    #[inline]
    pub fn from_string(path: String) -> Self {
        Self(Cow::Owned(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::from_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_owned_paths_compare_equal() {
        let owned = FieldPath::from_string("site.info.url".to_string());
        assert_eq!(owned, FieldPath::new("site.info.url"));
        assert_eq!(owned.as_str(), "site.info.url");
    }
}
