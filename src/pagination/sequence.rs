//! Lazy page-by-page cursor over a listing

use super::collection::Collection;
use super::request::CollectionRequest;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::types::{JsonObject, JsonValue, PageSize};
use futures::stream::{self, Stream};
use std::num::NonZeroU32;
use tracing::debug;

/// A restartable forward cursor over a remote, paged listing
///
/// No request is issued until the first read. The sequence then holds one
/// page at a time and fetches the next page only after the cursor moves past
/// the last slot of the current one.
///
/// The external iteration protocol is:
///
/// ```rust,ignore
/// let mut licenses = client.licenses().list().iter(25, JsonObject::new())?;
/// while licenses.has_next().await? {
///     let license = licenses.current().await?;
///     println!("{:?}", license.status());
///     licenses.advance();
/// }
/// ```
///
/// [`next_item`](Self::next_item) and [`into_stream`](Self::into_stream)
/// wrap the same protocol.
///
/// # Concurrency
///
/// A sequence is meant for sequential use by a single task. It has no
/// internal synchronization; every state change goes through `&mut self`,
/// so sharing one across tasks requires the caller's own lock.
#[derive(Debug)]
pub struct PagedSequence<T> {
    request: CollectionRequest<T>,
    params: JsonObject,
    per_page: NonZeroU32,
    page: u32,
    position: usize,
    data: Option<Collection<T>>,
}

impl<T> PagedSequence<T> {
    /// Create a sequence starting at page 1
    ///
    /// Fails with [`Error::InvalidInput`] when `per_page` is 0.
    pub fn new(request: CollectionRequest<T>, params: JsonObject, per_page: u32) -> Result<Self> {
        let per_page = NonZeroU32::new(per_page)
            .ok_or_else(|| Error::invalid_input("resources per page must be at least 1"))?;

        Ok(Self {
            request,
            params,
            per_page,
            page: 1,
            position: 0,
            data: None,
        })
    }

    /// Move back to the first item of page 1
    ///
    /// A loaded page 1 is kept, so restarting without having left page 1
    /// issues no request.
    pub fn restart(&mut self) {
        self.position = 0;
        if self.page != 1 {
            self.page = 1;
            self.data = None;
        }
    }

    /// Whether an item is available at the cursor on the current page
    ///
    /// Loads the current page if needed. Does not look ahead to later pages.
    pub async fn has_next(&mut self) -> Result<bool> {
        let position = self.position;
        let data = self.load().await?;
        Ok(position < data.len() && data.exists(position))
    }

    /// The item at the cursor
    ///
    /// Fails with [`Error::IndexOutOfRange`] past the end of the current page;
    /// check [`has_next`](Self::has_next) first.
    pub async fn current(&mut self) -> Result<&T> {
        let position = self.position;
        let data = self.load().await?;
        let len = data.len();
        data.get(position).ok_or(Error::IndexOutOfRange {
            index: position,
            len,
        })
    }

    /// Move the cursor forward
    ///
    /// Moving past the last slot of a page switches to the next page, which
    /// is fetched on the next read.
    pub fn advance(&mut self) {
        if self.position + 1 == self.per_page.get() as usize {
            self.page += 1;
            self.position = 0;
            self.data = None;
        } else {
            self.position += 1;
        }
    }

    /// Cursor position within the current page; not a resource identifier
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current page number, starting at 1
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.get()
    }

    /// Items of the current page
    pub async fn entries(&mut self) -> Result<&Collection<T>> {
        self.load().await
    }

    /// Every matching resource in one unbounded request
    ///
    /// Ignores the cursor and page state entirely; use with care on large
    /// listings.
    pub async fn all(&self) -> Result<Vec<T>> {
        self.request.all(&self.params).await
    }

    async fn load(&mut self) -> Result<&Collection<T>> {
        if self.data.is_none() {
            debug!(
                "Loading {} page {} ({} per page)",
                self.request.path(),
                self.page,
                self.per_page
            );
            let collection = self
                .request
                .fetch(&self.params, self.page, PageSize::Limited(self.per_page))
                .await?;
            self.data = Some(collection);
        }

        let page = self.page;
        self.data
            .as_ref()
            .ok_or_else(|| Error::malformed(page, "page could not be loaded"))
    }
}

impl<T: Resource> PagedSequence<T> {
    /// Attribute mappings of the current page's items
    pub async fn to_values(&mut self) -> Result<Vec<JsonValue>> {
        Ok(self.load().await?.to_values())
    }
}

impl<T: Clone> PagedSequence<T> {
    /// Return the item at the cursor and advance, or `None` at the end
    pub async fn next_item(&mut self) -> Result<Option<T>> {
        if !self.has_next().await? {
            return Ok(None);
        }
        let item = self.current().await?.clone();
        self.advance();
        Ok(Some(item))
    }
}

impl<T: Clone + Send + 'static> PagedSequence<T> {
    /// Drive the sequence as a stream of items
    ///
    /// The stream ends at the first empty slot and stops after the first
    /// error.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        stream::try_unfold(self, |mut sequence| async move {
            let item = sequence.next_item().await?;
            Ok::<_, Error>(item.map(|item| (item, sequence)))
        })
    }
}
