use crate::UrlError;
use url::Url;

/// Query parameters that never change page content
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "mc_eid"];

/// Canonicalizes a URL into the key used for a session's visited set
///
/// # Canonicalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Require an http or https scheme and a host
/// 3. Drop the fragment
/// 4. Drop tracking query parameters (`utm_*`, `fbclid`, `gclid`, `mc_eid`),
///    keeping the order of the rest
///
/// Scheme, host and path are otherwise kept as the `url` crate parsed them
/// (host lowercased, dot segments resolved), so same-domain checks keep
/// comparing exact hostnames.
///
/// # Examples
///
/// ```
/// use bubble_search::url::canonicalize_url;
///
/// let url = canonicalize_url("https://Example.COM/docs?utm_source=x#intro").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
/// ```
pub fn canonicalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    if let Some(query) = url.query().map(str::to_string) {
        let segments: Vec<&str> = query.split('&').collect();
        let kept: Vec<&str> = segments
            .iter()
            .copied()
            .filter(|segment| !is_tracking_segment(segment))
            .collect();

        // Untouched queries keep their original encoding
        if kept.len() != segments.len() {
            let rebuilt = kept.join("&");
            url.set_query((!rebuilt.is_empty()).then_some(rebuilt.as_str()));
        }
    }

    Ok(url)
}

/// Checks the decoded key of one raw `key=value` query segment
fn is_tracking_segment(segment: &str) -> bool {
    url::form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| is_tracking_param(&key))
}

fn is_tracking_param(key: &str) -> bool {
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_fragment() {
        let result = canonicalize_url("https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_keep_scheme_and_www() {
        let result = canonicalize_url("http://www.example.com/page").unwrap();
        assert_eq!(result.as_str(), "http://www.example.com/page");
    }

    #[test]
    fn test_remove_tracking_params_keep_order() {
        let result =
            canonicalize_url("https://example.com/page?b=2&utm_medium=email&a=1&fbclid=9")
                .unwrap();
        assert_eq!(result.as_str(), "https://example.com/page?b=2&a=1");
    }

    #[test]
    fn test_query_without_tracking_params_is_untouched() {
        let result = canonicalize_url("https://example.com/p?flag&q=a%20b").unwrap();
        assert_eq!(result.as_str(), "https://example.com/p?flag&q=a%20b");
    }

    #[test]
    fn test_kept_params_keep_their_encoding() {
        let result = canonicalize_url("https://example.com/p?q=a%20b&utm_source=x&flag").unwrap();
        assert_eq!(result.as_str(), "https://example.com/p?q=a%20b&flag");
    }

    #[test]
    fn test_all_tracking_params_removed() {
        let result = canonicalize_url("https://example.com/page?utm_source=a&gclid=c").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_lowercase_host_and_dot_segments() {
        let result = canonicalize_url("https://EXAMPLE.COM/a/../b/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/b/Page");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = canonicalize_url("ftp://example.com/page");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(
            canonicalize_url("not a url"),
            Err(UrlError::Parse(_))
        ));
    }
}
