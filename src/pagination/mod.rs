//! Pagination module
//!
//! Listing endpoints answer `GET <path>?page=N&limit=M` with a
//! `{"results": [...]}` envelope, where `limit=-1` returns everything.
//!
//! # Overview
//!
//! - [`CollectionRequest`] fetches one page and decodes it into a
//!   [`Collection`]
//! - [`PagedSequence`] walks a listing page by page, fetching lazily
//! - [`Collection`] holds one batch of items by position

mod collection;
mod request;
mod sequence;

pub use collection::Collection;
pub use request::{CollectionRequest, Transform, DEFAULT_PER_PAGE};
pub use sequence::PagedSequence;
