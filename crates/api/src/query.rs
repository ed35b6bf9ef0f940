//! Shared query parameter types for list endpoints.

use serde::Deserialize;

/// Generic list parameters (`?search=&page=&page_size=`).
///
/// Every table screen exposes the same three controls. Missing values fall
/// back to "no filter", page 1, and the default page size; clamping happens
/// in `bloomcart_core::listing`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListParams {
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(bloomcart_core::listing::DEFAULT_PAGE_SIZE)
    }
}
