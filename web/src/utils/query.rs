/// URL query-string state shared by every manager view. The query string is
/// the only persisted filter state: filter changes rewrite their own key and
/// force the list back to page 1, page changes touch only `page`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    params: Vec<(String, String)>,
}

impl QueryState {
    /// Parses a raw query string (with or without the leading `?`).
    /// Blank values are treated as absent keys.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start_matches('?');
        let params = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = urlencoding::decode(key).ok()?.into_owned();
                let value = urlencoding::decode(value).ok()?.into_owned();
                (!value.is_empty()).then_some((key, value))
            })
            .collect();
        QueryState { params }
    }

    /// Builds state from already-decoded pairs (e.g. the router's query map).
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let params = pairs
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();
        QueryState { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Current page, defaulting to 1 for absent or unparseable values.
    pub fn page(&self) -> u64 {
        self.get_u64("page").filter(|p| *p >= 1).unwrap_or(1)
    }

    /// Sets or clears a filter key and resets pagination. Page 1 is the
    /// implicit default so the `page` key is simply dropped.
    pub fn with_filter(&self, key: &str, value: Option<&str>) -> Self {
        let mut next = self.clone();
        next.params.retain(|(k, _)| k != key && k != "page");
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            next.params.push((key.to_string(), value.to_string()));
        }
        next
    }

    /// Page-only change: every filter stays put.
    pub fn with_page(&self, page: u64) -> Self {
        let mut next = self.clone();
        next.params.retain(|(k, _)| k != "page");
        if page > 1 {
            next.params.push(("page".to_string(), page.to_string()));
        }
        next
    }

    /// Renders as `?a=1&b=2`, or an empty string when no params are set.
    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let joined = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    /// Full href for `use_navigate`.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", path, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let state = QueryState::parse("?search=anna&page=4");
        let next = state.with_filter("role", Some("YOUTH_MEMBER"));
        assert_eq!(next.get("search"), Some("anna"));
        assert_eq!(next.get("role"), Some("YOUTH_MEMBER"));
        assert_eq!(next.page(), 1);
        assert_eq!(next.get("page"), None);
    }

    #[test]
    fn page_change_keeps_filters() {
        let state = QueryState::parse("search=anna&status=PENDING");
        let next = state.with_page(3);
        assert_eq!(next.get("search"), Some("anna"));
        assert_eq!(next.get("status"), Some("PENDING"));
        assert_eq!(next.page(), 3);
    }

    #[test]
    fn clearing_a_filter_drops_the_key() {
        let state = QueryState::parse("role=GUARDIAN&page=2");
        let next = state.with_filter("role", None);
        assert_eq!(next.get("role"), None);
        assert_eq!(next.to_query_string(), "");
    }

    #[test]
    fn round_trips_through_the_query_string() {
        let state = QueryState::parse("")
            .with_filter("search", Some("club night"))
            .with_filter("assigned_club", Some("7"))
            .with_page(2);
        let reparsed = QueryState::parse(&state.to_query_string());
        assert_eq!(reparsed.get("search"), Some("club night"));
        assert_eq!(reparsed.get("assigned_club"), Some("7"));
        assert_eq!(reparsed.page(), 2);
    }

    #[test]
    fn keys_are_order_independent_and_blank_values_absent() {
        let a = QueryState::parse("page=2&role=GUARDIAN");
        let b = QueryState::parse("role=GUARDIAN&page=2");
        assert_eq!(a.get("role"), b.get("role"));
        assert_eq!(a.page(), b.page());

        let blank = QueryState::parse("search=&page=1");
        assert_eq!(blank.get("search"), None);
        assert_eq!(blank.page(), 1);
    }

    #[test]
    fn bad_page_values_default_to_one() {
        assert_eq!(QueryState::parse("page=abc").page(), 1);
        assert_eq!(QueryState::parse("page=0").page(), 1);
        assert_eq!(QueryState::parse("").page(), 1);
    }
}
