//! Users service

use super::Endpoint;
use crate::error::Result;
use crate::pagination::CollectionRequest;
use crate::resource::{Resource, User};
use crate::types::{JsonObject, Method};

#[derive(Clone)]
pub struct UsersService {
    endpoint: Endpoint,
}

impl UsersService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<User> {
        self.endpoint.list("users")
    }

    pub async fn get(&self, user_id: i64) -> Result<User> {
        self.endpoint
            .fetch(
                Method::GET,
                &format!("users/{user_id}"),
                &JsonObject::new(),
                "Failed to retrieve resource",
            )
            .await
    }

    pub async fn create(&self, user: &User) -> Result<User> {
        self.endpoint
            .fetch(
                Method::POST,
                "users",
                user.attributes().as_map(),
                "Failed to create resource",
            )
            .await
    }
}
