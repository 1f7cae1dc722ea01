//! Collection endpoint configuration
//!
//! Static addresses and ceilings of the collection service.

/// Plain HTTP collection endpoint
pub const COLLECT_URL: &str = "http://www.google-analytics.com/collect";

/// TLS collection endpoint
pub const COLLECT_URL_SSL: &str = "https://ssl.google-analytics.com/collect";

/// Maximum POST body size in bytes
pub const MAX_POST_BODY_BYTES: usize = 8192;

/// Maximum length of a GET URL (endpoint, `?` and payload) in bytes
pub const MAX_URL_BYTES: usize = 2000;

/// Charset advertised on POST bodies
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Pick the collection endpoint
#[inline]
pub const fn collect_url(use_ssl: bool) -> &'static str {
    if use_ssl { COLLECT_URL_SSL } else { COLLECT_URL }
}

/// Build the full GET URL for a payload
#[inline]
pub fn get_url(endpoint: &str, payload: &str) -> String {
    format!("{}?{}", endpoint, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_url() {
        assert_eq!(collect_url(false), "http://www.google-analytics.com/collect");
        assert_eq!(collect_url(true), "https://ssl.google-analytics.com/collect");
    }

    #[test]
    fn test_get_url() {
        assert_eq!(
            get_url(COLLECT_URL, "v=1&tid=UA-1-1"),
            "http://www.google-analytics.com/collect?v=1&tid=UA-1-1"
        );
    }
}
