//! Site URL assembly.
//!
//! `url` carries scheme and host only; `base_url` is the path prefix the
//! site is served under and always starts and ends with `/`. Routes are
//! joined onto that prefix without introducing duplicate slashes.

/// Join a route onto `url` + `base_url`.
///
/// When `url` is unset the result is site-relative (starts with
/// `base_url`). Routes ending in `/` keep the trailing slash.
pub fn join_base(url: Option<&str>, base_url: &str, route: &str) -> String {
    let mut out = String::new();
    if let Some(url) = url {
        out.push_str(url.trim_end_matches('/'));
    }
    out.push_str(base_url);
    out.push_str(route.trim_start_matches('/'));
    out
}

/// Absolute (or site-relative) URL of the docs root, e.g.
/// `https://www.touch-sensing.org/PyTouch/docs/`.
pub fn docs_root_url(url: Option<&str>, base_url: &str, route_base: &str) -> String {
    let route = route_base.trim_matches('/');
    if route.is_empty() {
        join_base(url, base_url, "")
    } else {
        join_base(url, base_url, &format!("{route}/"))
    }
}

/// URL of a single document under the docs route, e.g.
/// `https://www.touch-sensing.org/PyTouch/docs/tutorials/train`.
pub fn doc_url(url: Option<&str>, base_url: &str, route_base: &str, doc_id: &str) -> String {
    let root = docs_root_url(url, base_url, route_base);
    format!("{root}{}", doc_id.trim_start_matches('/'))
}
