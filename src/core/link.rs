use thiserror::Error;

/// Where a navbar or footer link points.
///
/// Config items carry two optional fields, `to` (internal route) and
/// `href` (external URL); exactly one must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site-internal route, relative to `base_url` (e.g. "docs/").
    Internal(String),
    /// Absolute external URL.
    External(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkTargetError {
    #[error("both `to` and `href` are set")]
    Both,
    #[error("neither `to` nor `href` is set")]
    Neither,
}

impl LinkTarget {
    /// Classify a `to`/`href` pair, rejecting zero or two targets.
    pub fn classify(
        to: &Option<String>,
        href: &Option<String>,
    ) -> Result<Self, LinkTargetError> {
        match (to, href) {
            (Some(_), Some(_)) => Err(LinkTargetError::Both),
            (None, None) => Err(LinkTargetError::Neither),
            (Some(to), None) => Ok(Self::Internal(to.clone())),
            (None, Some(href)) => Ok(Self::External(href.clone())),
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let to = Some("docs/".to_string());
        let href = Some("https://github.com".to_string());

        assert_eq!(
            LinkTarget::classify(&to, &None),
            Ok(LinkTarget::Internal("docs/".into()))
        );
        assert_eq!(
            LinkTarget::classify(&None, &href),
            Ok(LinkTarget::External("https://github.com".into()))
        );
        assert_eq!(LinkTarget::classify(&to, &href), Err(LinkTargetError::Both));
        assert_eq!(
            LinkTarget::classify(&None, &None),
            Err(LinkTargetError::Neither)
        );
    }
}
