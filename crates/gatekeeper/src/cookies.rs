//! Minimal `Cookie` request-header parsing.
//!
//! The middleware only ever needs two named cookies per request, so this
//! reads values straight out of the raw header instead of materializing a
//! jar. Malformed pairs are skipped.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Look up a cookie value by name in the request headers.
///
/// Returns the first occurrence across all `Cookie` headers. Names are
/// compared case-sensitively, per RFC 6265.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k.trim() == name).then(|| v.trim())
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(raw: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(COOKIE, HeaderValue::from_str(raw).unwrap());
        map
    }

    #[test]
    fn finds_named_cookie() {
        let h = headers("dev_auth=1; uid=7");
        assert_eq!(cookie_value(&h, "dev_auth"), Some("1"));
        assert_eq!(cookie_value(&h, "uid"), Some("7"));
    }

    #[test]
    fn missing_cookie_is_none() {
        let h = headers("uid=7");
        assert_eq!(cookie_value(&h, "dev_auth"), None);
    }

    #[test]
    fn tolerates_spacing_and_malformed_pairs() {
        let h = headers("junk;  uid = 7 ;dev_auth=1");
        assert_eq!(cookie_value(&h, "uid"), Some("7"));
        assert_eq!(cookie_value(&h, "dev_auth"), Some("1"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let h = headers("UID=7");
        assert_eq!(cookie_value(&h, "uid"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let h = headers("uid=7; uid=9");
        assert_eq!(cookie_value(&h, "uid"), Some("7"));
    }

    #[test]
    fn empty_value_is_preserved() {
        let h = headers("uid=");
        assert_eq!(cookie_value(&h, "uid"), Some(""));
    }
}
