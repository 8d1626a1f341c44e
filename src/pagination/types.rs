//! Pagination types and traits
//!
//! Defines the page abstraction and the fetch capability the
//! auto-paginator drives.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Query parameters for a page request
pub type QueryParams = HashMap<String, String>;

/// One fetched batch of results
///
/// Items keep the exact order the server returned them. An absent
/// `next_link` means this was the last page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server response order
    pub items: Vec<T>,
    /// Opaque URL of the next page, extracted from response metadata
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_link: Option<String>) -> Self {
        Self { items, next_link }
    }

    /// Create a final page with no successor
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_link: None,
        }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Capability to fetch one page of a list endpoint
///
/// The first request of a consumption carries the initial query
/// parameters; follow-up requests pass the `next_link` URL and no
/// parameters, since the link already encodes them.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch a single page
    async fn fetch_page(&self, url: &str, params: Option<&QueryParams>) -> Result<Page<T>>;
}

/// Iteration state for one consumption of a paginated sequence
///
/// Owned by a single stream; never shared across consumptions. The
/// counters exist for diagnostics only.
#[derive(Debug)]
pub(crate) struct PaginationCursor {
    /// URL of the next page to fetch, `None` once exhausted
    next_url: Option<String>,
    /// Query parameters for the first fetch only
    initial_params: Option<QueryParams>,
    /// Pages fetched so far
    pages_fetched: u32,
    /// Items emitted so far
    items_seen: u64,
}

impl PaginationCursor {
    /// Cursor positioned at the first page
    pub(crate) fn start(url: String, params: Option<QueryParams>) -> Self {
        Self {
            next_url: Some(url),
            initial_params: params,
            pages_fetched: 0,
            items_seen: 0,
        }
    }

    /// URL to fetch next, or `None` when the sequence is complete
    pub(crate) fn take_next_url(&mut self) -> Option<String> {
        self.next_url.take()
    }

    /// Parameters for the upcoming fetch; present only before the first one
    pub(crate) fn take_initial_params(&mut self) -> Option<QueryParams> {
        self.initial_params.take()
    }

    /// Record a fetched page and position the cursor at its successor
    pub(crate) fn advance<T>(&mut self, page: &Page<T>) {
        self.pages_fetched += 1;
        self.items_seen += page.len() as u64;
        self.next_url = page.next_link.clone();
    }

    /// Pages fetched so far
    pub(crate) fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Items emitted so far
    pub(crate) fn items_seen(&self) -> u64 {
        self.items_seen
    }
}
