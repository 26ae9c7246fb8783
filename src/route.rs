//! Active-route matching
//!
//! Decides which pill corresponds to the screen currently shown. Paths are
//! compared after stripping trailing slashes; the root path `/` is kept
//! as-is. At most one item can match, since matching is plain equality over
//! normalized strings and item hrefs are unique by contract.

/// Normalize a route path for comparison.
pub fn normalize(path: &str) -> &str {
    if path == "/" {
        path
    } else {
        path.trim_end_matches('/')
    }
}

/// True when `href` addresses the currently displayed route.
pub fn is_active(current: &str, href: &str) -> bool {
    normalize(current) == normalize(href)
}
