//! Licensing plans

use super::{Attributes, Resource, Term};
use crate::types::JsonValue;
use chrono::NaiveDateTime;

/// A plan licenses are issued from: type, terms and restrictions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicensingPlan {
    attributes: Attributes,
}

impl LicensingPlan {
    pub fn identifier(&self) -> Option<&str> {
        self.attributes.get_str("identifier")
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str("name")
    }

    /// Plan type: `subscription` or `perpetual`
    pub fn plan_type(&self) -> Option<&str> {
        self.attributes.get_str("type")
    }

    pub fn text(&self) -> Option<&str> {
        self.attributes.get_str("text")
    }

    /// Whether licenses issued from this plan are locked against transfer
    pub fn transfer_lock(&self) -> bool {
        self.attributes.get_bool("license_transfer_lock")
    }

    pub fn project_identifier(&self) -> Option<&str> {
        self.attributes.get_str("project_identifier")
    }

    pub fn project_id(&self) -> Option<i64> {
        self.attributes.get_i64("project_id")
    }

    pub fn project_name(&self) -> Option<&str> {
        self.attributes.get_str("project.name")
    }

    pub fn subscription_term(&self) -> Option<Term> {
        if !self.is_subscription() {
            return None;
        }
        Term::nested(&self.attributes, "subscription_term")
    }

    pub fn update_access_restrictions(&self) -> Option<&Vec<JsonValue>> {
        self.attributes.get_array("update_access_restrictions")
    }

    pub fn update_access_expiration_term(&self) -> Option<Term> {
        self.complete_term("update_access_expiration_term")
    }

    pub fn update_access_expiration_version(&self) -> Option<&str> {
        self.attributes.get_str("update_access_expiration_version")
    }

    /// Minimum time a license must be held before it can be transferred
    pub fn transfer_restriction_term(&self) -> Option<Term> {
        self.complete_term("transfer_restriction_term")
    }

    pub fn is_subscription(&self) -> bool {
        self.plan_type() == Some("subscription")
    }

    pub fn is_perpetual(&self) -> bool {
        self.plan_type() == Some("perpetual")
    }

    pub fn is_permanent(&self) -> bool {
        self.is_perpetual()
    }

    pub fn created_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("created_date")
    }

    // Plan terms only count when both identifier and a non-zero length are set
    fn complete_term(&self, prefix: &str) -> Option<Term> {
        let term = Term::nested(&self.attributes, prefix)?;
        let has_identifier = term.identifier().is_some_and(|s| !s.is_empty());
        let has_length = term.length().is_some_and(|n| n != 0);
        (has_identifier && has_length).then_some(term)
    }
}

impl Resource for LicensingPlan {
    fn from_attributes(attributes: Attributes) -> Self {
        Self { attributes }
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
