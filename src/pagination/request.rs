//! Page fetcher for listing endpoints
//!
//! A [`CollectionRequest`] issues one `GET` against a listing path with
//! `page` and `limit` parameters and decodes the `{"results": [...]}`
//! envelope into a [`Collection`].
//!
//! Listing is lenient: an unsuccessful status or a body without `results`
//! yields an empty collection instead of an error, so loops over listings
//! stay simple. Callers that must tell "no results" apart from "request
//! failed" should use single-resource operations or inspect the logs.

use super::collection::Collection;
use super::sequence::PagedSequence;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::resource::Resource;
use crate::types::{json_kind, JsonObject, JsonValue, Method, PageSize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of resources fetched per page when iterating
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Turns one raw listing element into an item
pub type Transform<T> = Arc<dyn Fn(JsonValue) -> Result<T> + Send + Sync>;

/// Builder and executor for a listing request
///
/// Configure with [`page`](Self::page) and [`limit`](Self::limit), then call
/// [`get`](Self::get). Every call returns a fresh collection.
pub struct CollectionRequest<T> {
    transport: Arc<dyn Transport>,
    path: String,
    transform: Transform<T>,
    page: u32,
    limit: PageSize,
}

impl<T> CollectionRequest<T> {
    /// Create a request for `path` decoding each element with `transform`
    ///
    /// Starts at page 1 with no limit.
    pub fn new(
        transport: Arc<dyn Transport>,
        path: impl Into<String>,
        transform: Transform<T>,
    ) -> Self {
        Self {
            transport,
            path: path.into(),
            transform,
            page: 1,
            limit: PageSize::All,
        }
    }

    /// Set the page to retrieve; pages start at 1 and 0 is treated as 1
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the maximum number of resources to retrieve
    #[must_use]
    pub fn limit(mut self, limit: PageSize) -> Self {
        self.limit = limit;
        self
    }

    /// The listing path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The configured page number
    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// The configured page size
    pub fn page_size(&self) -> PageSize {
        self.limit
    }

    /// Fetch the configured page as a collection
    ///
    /// `params` are sent alongside `page` and `limit`, which take precedence
    /// over same-named entries in `params`.
    pub async fn get(&self, params: &JsonObject) -> Result<Collection<T>> {
        self.fetch(params, self.page, self.limit).await
    }

    /// Fetch an arbitrary page without touching the builder configuration
    pub(crate) async fn fetch(
        &self,
        params: &JsonObject,
        page: u32,
        limit: PageSize,
    ) -> Result<Collection<T>> {
        let mut query = params.clone();
        query.insert("page".to_string(), JsonValue::from(page));
        query.insert("limit".to_string(), JsonValue::from(limit.as_param()));

        let response = self
            .transport
            .request(Method::GET, &self.path, &query)
            .await?;

        if !response.is_successful() {
            warn!(
                "Listing {} page {} failed with HTTP {}: {}",
                self.path,
                page,
                response.status(),
                response.error_message().unwrap_or_default()
            );
            return Ok(Collection::new());
        }

        let results = match response.json_body().and_then(|body| body.get("results")) {
            Some(results) => results.clone(),
            None => {
                warn!(
                    "Listing {} page {} returned no results envelope",
                    self.path, page
                );
                return Ok(Collection::new());
            }
        };

        let JsonValue::Array(raw_items) = results else {
            return Err(Error::malformed(
                page,
                format!("results is {}, expected an array", json_kind(&results)),
            ));
        };

        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                (self.transform)(raw).map_err(|e| {
                    Error::malformed(page, format!("item #{position} could not be decoded: {e}"))
                })
            })
            .collect::<Result<Vec<T>>>()?;

        debug!(
            "Fetched {} page {} (limit {}): {} items",
            self.path,
            page,
            limit.as_param(),
            items.len()
        );

        Ok(Collection::from_items(items))
    }

    /// A raw variant of this request that keeps elements as JSON values
    pub fn raw(&self) -> CollectionRequest<JsonValue> {
        CollectionRequest {
            transport: Arc::clone(&self.transport),
            path: self.path.clone(),
            transform: Arc::new(|value: JsonValue| -> Result<JsonValue> { Ok(value) }),
            page: self.page,
            limit: self.limit,
        }
    }

    /// Iterate the listing page by page, `per_page` resources at a time
    ///
    /// Fails with [`Error::InvalidInput`] when `per_page` is 0.
    #[allow(clippy::iter_not_returning_iterator)]
    pub fn iter(&self, per_page: u32, params: JsonObject) -> Result<PagedSequence<T>> {
        PagedSequence::new(self.clone(), params, per_page)
    }

    /// Iterate the listing [`DEFAULT_PER_PAGE`] resources at a time
    pub fn paged(&self, params: JsonObject) -> Result<PagedSequence<T>> {
        self.iter(DEFAULT_PER_PAGE, params)
    }

    /// Fetch every matching resource in one unbounded request (page 1)
    pub async fn all(&self, params: &JsonObject) -> Result<Vec<T>> {
        self.fetch(params, 1, PageSize::All)
            .await
            .map(Collection::into_vec)
    }
}

impl<T: Resource + 'static> CollectionRequest<T> {
    /// Create a request for `path` decoding each element into a `T`
    pub fn for_resource(transport: Arc<dyn Transport>, path: impl Into<String>) -> Self {
        Self::new(transport, path, Arc::new(T::from_value))
    }
}

impl<T> Clone for CollectionRequest<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            path: self.path.clone(),
            transform: Arc::clone(&self.transform),
            page: self.page,
            limit: self.limit,
        }
    }
}

impl<T> fmt::Debug for CollectionRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionRequest")
            .field("path", &self.path)
            .field("page", &self.page)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
