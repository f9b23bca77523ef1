use crate::UrlError;

/// Normalizes the base path a site is served under
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; an empty base path becomes `/`
/// 2. Reject full URLs, query strings, fragments, inner whitespace,
///    empty segments (`//`) and dot segments (`.` and `..`)
/// 3. Add a leading slash if missing
/// 4. Add a trailing slash if missing
///
/// # Arguments
///
/// * `base_url` - The configured base path (e.g. `/BramblDart`)
///
/// # Returns
///
/// * `Ok(String)` - Normalized base path, always starting and ending with `/`
/// * `Err(UrlError)` - The base path cannot be part of an absolute URL path
///
/// # Examples
///
/// ```
/// use docsite_config::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("/BramblDart").unwrap(), "/BramblDart/");
/// assert_eq!(normalize_base_url("docs").unwrap(), "/docs/");
/// assert_eq!(normalize_base_url("").unwrap(), "/");
/// ```
pub fn normalize_base_url(base_url: &str) -> Result<String, UrlError> {
    let trimmed = base_url.trim();

    if trimmed.is_empty() || trimmed == "/" {
        return Ok("/".to_string());
    }

    if trimmed.contains("://") {
        return Err(UrlError::Malformed(format!(
            "base path must be a path, not a full URL: '{}'",
            base_url
        )));
    }

    if let Some(c) = trimmed
        .chars()
        .find(|c| c.is_whitespace() || *c == '?' || *c == '#')
    {
        return Err(UrlError::Malformed(format!(
            "base path '{}' contains forbidden character {:?}",
            base_url, c
        )));
    }

    let inner = trimmed.trim_start_matches('/').trim_end_matches('/');
    if trimmed.starts_with("//") || trimmed.ends_with("//") {
        return Err(UrlError::Malformed(format!(
            "base path '{}' contains an empty segment",
            base_url
        )));
    }

    for segment in inner.split('/') {
        if segment.is_empty() {
            return Err(UrlError::Malformed(format!(
                "base path '{}' contains an empty segment",
                base_url
            )));
        }
        if segment == "." || segment == ".." {
            return Err(UrlError::Malformed(format!(
                "base path '{}' contains a dot segment",
                base_url
            )));
        }
    }

    Ok(format!("/{}/", inner))
}
