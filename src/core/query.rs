//! Query-string codec for the navigation state.
//!
//! The page URL's query parameters are the source of truth for what the
//! browser shows: `page`, `page_size` (legacy alias `size`), `route_path`
//! and `search`. Parsing never fails; bad numbers fall back to defaults and
//! everything else is passed through for the server to judge.

use url::form_urlencoded;

use crate::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Breadcrumb, NavigationState};

/// Parse a URL (or a bare query string) into a [`NavigationState`].
pub fn parse_state(url: &str) -> NavigationState {
    let mut page = None;
    let mut page_size = None;
    let mut legacy_size = None;
    let mut route_path = String::new();
    let mut search = String::new();

    for (key, value) in form_urlencoded::parse(query_part(url).as_bytes()) {
        match key.as_ref() {
            "page" => page = Some(parse_positive(&value, DEFAULT_PAGE)),
            "page_size" => page_size = Some(parse_positive(&value, DEFAULT_PAGE_SIZE)),
            "size" => legacy_size = Some(parse_positive(&value, DEFAULT_PAGE_SIZE)),
            "route_path" => route_path = value.into_owned(),
            "search" => search = value.into_owned(),
            _ => {}
        }
    }

    NavigationState {
        page: page.unwrap_or(DEFAULT_PAGE),
        page_size: page_size.or(legacy_size).unwrap_or(DEFAULT_PAGE_SIZE),
        breadcrumb: Breadcrumb::from_route_path(&route_path),
        route_path,
        search,
    }
}

/// Form-urlencode key/value pairs, keeping their order.
pub fn encode_query<K, V, I>(pairs: I) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

impl NavigationState {
    /// Encode this view as a query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        encode_query(self.query_pairs())
    }
}

/// The part of a URL between `?` and `#`.
fn query_part(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

/// Parse a strictly positive integer, falling back on anything else.
fn parse_positive(value: &str, default: u32) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let state = parse_state(
            "https://tip.example.com/thermal-files/?route_path=a%2Fb&page=3&page_size=25&search=flight#top",
        );
        assert_eq!(state.page, 3);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.route_path, "a/b");
        assert_eq!(state.search, "flight");
        assert_eq!(state.breadcrumb.segments(), ["", "a", "b"]);
    }

    #[test]
    fn test_parse_defaults() {
        let state = parse_state("https://tip.example.com/thermal-files/");
        assert_eq!(state, NavigationState::default());
        assert_eq!(parse_state(""), NavigationState::default());
        assert_eq!(parse_state("?"), NavigationState::default());
    }

    #[test]
    fn test_parse_bad_numbers_fall_back() {
        for bad in ["abc", "", "0", "-3", "2.5", "1e3", "99999999999"] {
            let state = parse_state(&format!("?page={bad}&page_size={bad}"));
            assert_eq!(state.page, 1, "page={bad}");
            assert_eq!(state.page_size, 10, "page_size={bad}");
        }
        assert_eq!(parse_state("?page=%204%20").page, 4);
    }

    #[test]
    fn test_parse_legacy_size_alias() {
        assert_eq!(parse_state("?size=50").page_size, 50);
        assert_eq!(parse_state("?size=50&page_size=25").page_size, 25);
        assert_eq!(parse_state("?page_size=25&size=50").page_size, 25);
    }

    #[test]
    fn test_parse_bare_query() {
        let state = parse_state("route_path=x&search=a+b");
        assert_eq!(state.route_path, "x");
        assert_eq!(state.search, "a b");
    }

    #[test]
    fn test_round_trip() {
        let queries = [
            "page=2&page_size=5&route_path=a%2Fb&search=",
            "page=1&page_size=10&route_path=&search=",
            "page=7&page_size=100&route_path=survey+2024%2Fday+1&search=IR+%26+RGB",
        ];
        for query in queries {
            let state = parse_state(query);
            assert_eq!(state.to_query(), query);
            assert_eq!(parse_state(&state.to_query()), state);
        }
    }

    #[test]
    fn test_encode_arbitrary_pairs() {
        assert_eq!(encode_query([("file_path", "/data/a b.tif")]), "file_path=%2Fdata%2Fa+b.tif");
        assert_eq!(encode_query(Vec::<(&str, &str)>::new()), "");
    }
}
