use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Hard cap on the full-scan page loop. The backend never reports more than
/// a few thousand records per collection, so hitting this means the stop
/// signals are broken and we bail instead of looping forever.
pub const MAX_SCAN_PAGES: u32 = 100;

/// Page size requested while draining a collection.
pub const SCAN_PAGE_SIZE: u32 = 100;

/// Default page size for server-side paginated tables.
pub const TABLE_PAGE_SIZE: u64 = 20;

#[derive(Debug, Error)]
pub enum PageShapeError {
    #[error("unexpected collection shape: expected array or paginated envelope")]
    UnexpectedShape,
    #[error("collection item did not match schema: {0}")]
    Item(#[from] serde_json::Error),
}

/// One page of a backend collection, normalized from the two shapes the API
/// actually returns (bare array, `{results, count, next}` envelope).
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub has_next: bool,
}

/// Normalizes a collection response body. A bare array is a complete
/// single-page collection; an envelope carries its own `count`/`next`
/// pagination signals; anything else is rejected rather than treated as
/// an empty list.
pub fn parse_collection<T: DeserializeOwned>(
    body: Value,
) -> Result<CollectionPage<T>, PageShapeError> {
    match body {
        Value::Array(_) => {
            let items: Vec<T> = serde_json::from_value(body)?;
            Ok(CollectionPage {
                count: items.len() as u64,
                has_next: false,
                items,
            })
        }
        Value::Object(mut map) => {
            let results = map
                .remove("results")
                .ok_or(PageShapeError::UnexpectedShape)?;
            if !results.is_array() {
                return Err(PageShapeError::UnexpectedShape);
            }
            let items: Vec<T> = serde_json::from_value(results)?;
            let count = map
                .get("count")
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            let has_next = map
                .get("next")
                .map(|next| !next.is_null())
                .unwrap_or(false);
            Ok(CollectionPage {
                items,
                count,
                has_next,
            })
        }
        _ => Err(PageShapeError::UnexpectedShape),
    }
}

/// Loop control for the drain-all-pages fetch. The async half of the scan
/// lives in `api::client`; this keeps the stop decision synchronous so it
/// can be tested without a backend.
#[derive(Debug, Clone)]
pub struct ScanCursor {
    pub page: u32,
    pub fetched: u64,
    pub reported_total: Option<u64>,
}

impl ScanCursor {
    pub fn new() -> Self {
        ScanCursor {
            page: 1,
            fetched: 0,
            reported_total: None,
        }
    }

    /// Records one fetched page and decides whether to request another.
    /// Stops on: an empty page, no `next` link, accumulated count reaching
    /// the reported total, or the page cap.
    pub fn advance<T>(&mut self, page: &CollectionPage<T>) -> bool {
        self.fetched += page.items.len() as u64;
        self.reported_total = Some(page.count);

        if page.items.is_empty() || !page.has_next {
            return false;
        }
        if self.fetched >= page.count {
            return false;
        }
        if self.page >= MAX_SCAN_PAGES {
            return false;
        }
        self.page += 1;
        true
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// `ceil(count / page_size)` pages; zero records means zero pages.
pub fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Client-side pagination over an already-filtered in-memory set.
pub fn page_slice<T: Clone>(items: &[T], page: u64, page_size: u64) -> Vec<T> {
    let page = page.max(1);
    let start = ((page - 1) * page_size) as usize;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size as usize).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(serde::Deserialize, Debug, PartialEq, Clone)]
    struct Row {
        id: i64,
    }

    #[test]
    fn bare_array_is_a_complete_collection() {
        let page: CollectionPage<Row> =
            parse_collection(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.count, 2);
        assert!(!page.has_next);
    }

    #[test]
    fn envelope_carries_count_and_next() {
        let page: CollectionPage<Row> = parse_collection(json!({
            "results": [{"id": 1}],
            "count": 41,
            "next": "https://api.example.com/users/?page=2"
        }))
        .unwrap();
        assert_eq!(page.count, 41);
        assert!(page.has_next);

        let last: CollectionPage<Row> = parse_collection(json!({
            "results": [{"id": 41}],
            "count": 41,
            "next": null
        }))
        .unwrap();
        assert!(!last.has_next);
    }

    #[test]
    fn unexpected_shapes_are_rejected_not_emptied() {
        assert!(parse_collection::<Row>(json!("nope")).is_err());
        assert!(parse_collection::<Row>(json!({"detail": "error"})).is_err());
        assert!(parse_collection::<Row>(json!(7)).is_err());
    }

    fn fake_page(len: usize, count: u64, has_next: bool) -> CollectionPage<Row> {
        CollectionPage {
            items: (0..len as i64).map(|id| Row { id }).collect(),
            count,
            has_next,
        }
    }

    #[test]
    fn scan_terminates_on_empty_dataset() {
        let mut cursor = ScanCursor::new();
        assert!(!cursor.advance(&fake_page(0, 0, false)));
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.fetched, 0);
    }

    #[test]
    fn scan_terminates_when_dataset_divides_evenly() {
        // 200 records at page size 100: two pages, second has no next.
        let mut cursor = ScanCursor::new();
        assert!(cursor.advance(&fake_page(100, 200, true)));
        assert_eq!(cursor.page, 2);
        assert!(!cursor.advance(&fake_page(100, 200, false)));
        assert_eq!(cursor.fetched, 200);
        assert_eq!(cursor.reported_total, Some(200));
    }

    #[test]
    fn scan_stops_at_reported_total_even_with_next_link() {
        let mut cursor = ScanCursor::new();
        assert!(cursor.advance(&fake_page(100, 150, true)));
        assert!(!cursor.advance(&fake_page(50, 150, true)));
        assert_eq!(cursor.fetched, 150);
    }

    #[test]
    fn scan_respects_the_page_cap() {
        let mut cursor = ScanCursor::new();
        for _ in 0..(MAX_SCAN_PAGES - 1) {
            assert!(cursor.advance(&fake_page(100, 1_000_000, true)));
        }
        assert_eq!(cursor.page, MAX_SCAN_PAGES);
        assert!(!cursor.advance(&fake_page(100, 1_000_000, true)));
    }

    #[test]
    fn page_math_matches_ceiling_division() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(200, 100), 2);
    }

    #[test]
    fn page_slices_concatenate_without_loss_or_duplicates() {
        let items: Vec<Row> = (0..47).map(|id| Row { id }).collect();
        let pages = total_pages(items.len() as u64, 10);
        assert_eq!(pages, 5);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend(page_slice(&items, page, 10));
        }
        assert_eq!(rebuilt, items);
        assert!(page_slice(&items, pages + 1, 10).is_empty());
    }
}
