//! Projects and project options services

use super::{require_id, Endpoint};
use crate::error::Result;
use crate::pagination::CollectionRequest;
use crate::resource::{Project, ProjectOption, Resource};
use crate::types::{JsonObject, Method};

/// Service for project operations
#[derive(Clone)]
pub struct ProjectsService {
    endpoint: Endpoint,
}

impl ProjectsService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<Project> {
        self.endpoint.list("projects")
    }

    pub async fn get(&self, project_id: i64) -> Result<Project> {
        self.endpoint
            .fetch(
                Method::GET,
                &format!("projects/{project_id}"),
                &JsonObject::new(),
                "Failed to retrieve resource",
            )
            .await
    }

    pub async fn update(&self, project: &Project) -> Result<Project> {
        let id = require_id(project, "project")?;
        self.endpoint
            .fetch(
                Method::POST,
                &format!("projects/{id}"),
                project.attributes().as_map(),
                "Failed to update resource",
            )
            .await
    }
}

/// Service for project options; listing only
#[derive(Clone)]
pub struct ProjectOptionsService {
    endpoint: Endpoint,
}

impl ProjectOptionsService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<ProjectOption> {
        self.endpoint.list("project_options")
    }
}
