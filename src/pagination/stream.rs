//! Lazy stream construction over paged endpoints
//!
//! A [`Paginated`] handle is cold: building it performs no I/O, and each
//! call to [`Paginated::pages`] or [`Paginated::items`] starts an
//! independent consumption with its own cursor. Fetching is driven by
//! demand; a consumer that stops early causes no further requests.

use super::types::{Page, PageFetcher, PaginationCursor, QueryParams};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use tracing::debug;

/// A paged list endpoint, ready to be consumed as a stream
pub struct Paginated<'a, T> {
    fetcher: &'a dyn PageFetcher<T>,
    url: String,
    params: Option<QueryParams>,
}

impl<'a, T: Send + 'a> Paginated<'a, T> {
    /// Bind a fetcher to a first-page URL
    pub fn new(fetcher: &'a dyn PageFetcher<T>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            params: None,
        }
    }

    /// Query parameters for the first request
    ///
    /// Follow-up requests carry none; the next-page link encodes them.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Stream of pages, fetched one per poll of the stream
    ///
    /// Terminates after the page without a next link. A fetch failure
    /// ends the consumption with that error, verbatim; pages already
    /// emitted stand, and nothing is retried here.
    pub fn pages(&self) -> impl Stream<Item = Result<Page<T>>> + 'a {
        let fetcher = self.fetcher;
        let cursor = PaginationCursor::start(self.url.clone(), self.params.clone());

        stream::try_unfold(cursor, move |mut cursor| async move {
            let Some(url) = cursor.take_next_url() else {
                return Ok(None);
            };
            let params = cursor.take_initial_params();
            let page = fetcher.fetch_page(&url, params.as_ref()).await?;
            cursor.advance(&page);
            debug!(
                %url,
                pages = cursor.pages_fetched(),
                items = cursor.items_seen(),
                "fetched page"
            );
            Ok(Some((page, cursor)))
        })
    }

    /// Stream of individual items, in server order across pages
    ///
    /// The next page is requested only once every item of the current
    /// one has been consumed.
    pub fn items(&self) -> impl Stream<Item = Result<T>> + 'a {
        self.pages()
            .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<_, Error>)))
            .try_flatten()
    }
}

impl<T> std::fmt::Debug for Paginated<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("url", &self.url)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Adapt a single asynchronous result into a one-element cold stream
///
/// The counterpart of [`Paginated::items`] for non-list operations:
/// the same underlying future, exposed as a stream, without duplicating
/// any logic across the two surfaces.
pub fn once_item<T, Fut>(future: Fut) -> impl Stream<Item = Result<T>>
where
    Fut: Future<Output = Result<T>>,
{
    stream::once(future)
}
