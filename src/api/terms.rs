//! Terms service

use super::Endpoint;
use crate::pagination::CollectionRequest;
use crate::resource::Term;

/// Service listing the terms licenses and plans can use
#[derive(Clone)]
pub struct TermsService {
    endpoint: Endpoint,
}

impl TermsService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<Term> {
        self.endpoint.list("terms")
    }
}
