//! Auto-pagination
//!
//! # Overview
//!
//! Turns a paged list endpoint into a single ordered, lazy sequence of
//! items. The consumer sees one `Stream`; behind it the paginator
//! follows the `next` link of each fetched [`Page`] until a page has
//! none. Sequences are cold: no request is issued before the first
//! poll, and every fresh consumption restarts from page one with its
//! own cursor.

mod stream;
mod types;

pub use stream::{once_item, Paginated};
pub use types::{Page, PageFetcher, QueryParams};

#[cfg(test)]
mod tests;
