//! URL handling module
//!
//! This module provides base path normalization and the joining of a site's
//! canonical URL with its base path into the absolute site root.

mod normalize;

use crate::UrlError;
use url::Url;

pub use normalize::normalize_base_url;

/// Joins a canonical site URL and a base path into the absolute site root
///
/// Any path already present on `url` is kept as a prefix of the base path,
/// so `https://example.com/` with `/docs` yields `https://example.com/docs/`.
///
/// # Arguments
///
/// * `url` - Canonical site URL, must be absolute `http` or `https`
/// * `base_url` - Base path the site is served under
///
/// # Returns
///
/// * `Ok(Url)` - The absolute site root, always ending with `/`
/// * `Err(UrlError)` - Either part is malformed
///
/// # Examples
///
/// ```
/// use docsite_config::url::site_root;
///
/// let root = site_root("https://topl.github.io/", "/BramblDart").unwrap();
/// assert_eq!(root.as_str(), "https://topl.github.io/BramblDart/");
/// ```
pub fn site_root(url: &str, base_url: &str) -> Result<Url, UrlError> {
    let mut root = Url::parse(url.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if root.scheme() != "http" && root.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            root.scheme()
        )));
    }

    if root.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    if root.query().is_some() || root.fragment().is_some() {
        return Err(UrlError::Malformed(format!(
            "site URL '{}' must not carry a query or fragment",
            url
        )));
    }

    let base = normalize_base_url(base_url)?;
    let prefix = root.path().trim_end_matches('/').to_string();
    root.set_path(&format!("{}{}", prefix, base));

    Ok(root)
}
