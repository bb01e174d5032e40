//! Licensing plans service

use super::{require_id, Endpoint};
use crate::error::Result;
use crate::pagination::CollectionRequest;
use crate::resource::{LicensingPlan, Resource};
use crate::types::{JsonObject, Method};

#[derive(Clone)]
pub struct LicensingPlansService {
    endpoint: Endpoint,
}

impl LicensingPlansService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<LicensingPlan> {
        self.endpoint.list("licensing_plans")
    }

    pub async fn get(&self, licensing_plan_id: i64) -> Result<LicensingPlan> {
        self.endpoint
            .fetch(
                Method::GET,
                &format!("licensing_plans/{licensing_plan_id}"),
                &JsonObject::new(),
                "Failed to retrieve resource",
            )
            .await
    }

    pub async fn update(&self, licensing_plan: &LicensingPlan) -> Result<LicensingPlan> {
        let id = require_id(licensing_plan, "licensing plan")?;
        self.endpoint
            .fetch(
                Method::POST,
                &format!("licensing_plans/{id}"),
                licensing_plan.attributes().as_map(),
                "Failed to update resource",
            )
            .await
    }
}
