//! Search filtering and pagination for entity collections.
//!
//! Every list screen works the same way: fetch the full collection from
//! upstream, filter it by a case-insensitive substring match over a fixed
//! set of fields, then slice the filtered sequence into pages. Export uses
//! the filtered sequence *before* pagination.

use serde::Serialize;
use serde_json::Value;

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound on client-requested page sizes.
pub const MAX_PAGE_SIZE: usize = 100;

/// One page of a filtered collection.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    pub page_size: usize,
    /// Total records across all pages (after filtering).
    pub total: usize,
    /// `ceil(total / page_size)`; zero when the collection is empty.
    pub total_pages: usize,
}

/// Render a JSON scalar the way it appears in a table cell.
///
/// Strings match on their content; numbers and booleans on their display
/// form. Arrays, objects, and nulls never match a search term.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether `record` matches `term` in any of the named fields.
///
/// Matching is a case-insensitive substring test. An empty (or
/// whitespace-only) term matches every record. Fields missing from the
/// record are skipped.
pub fn matches(record: &Value, fields: &[&str], term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    fields.iter().any(|field| {
        record
            .get(field)
            .and_then(cell_text)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// Filter a collection by search term, preserving order.
pub fn filter_records(records: &[Value], fields: &[&str], term: &str) -> Vec<Value> {
    records
        .iter()
        .filter(|r| matches(r, fields, term))
        .cloned()
        .collect()
}

/// Slice a filtered collection into one page.
///
/// Pages are 1-based; `page` 0 is treated as 1 and a page past the end
/// yields an empty item list (the totals still describe the whole
/// collection). `page_size` 0 falls back to the default and is capped at
/// [`MAX_PAGE_SIZE`].
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = match page_size {
        0 => DEFAULT_PAGE_SIZE,
        n => n.min(MAX_PAGE_SIZE),
    };
    let page = page.max(1);

    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}
