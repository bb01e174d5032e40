//! Licenses

use super::{Attributes, Resource, Term};
use crate::types::JsonValue;
use chrono::NaiveDateTime;

/// A license granted to a user for a licensing plan
///
/// Subscription licenses carry a [`Term`] and expire; perpetual licenses do
/// not. Update access (which versions the holder may download) is tracked
/// separately by date, term or version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct License {
    attributes: Attributes,
}

impl License {
    /// License type: `subscription` or `perpetual`
    pub fn license_type(&self) -> Option<&str> {
        self.attributes.get_str("type")
    }

    pub fn set_license_type(&mut self, license_type: impl Into<String>) {
        self.attributes.set("type", license_type.into());
    }

    /// The subscription term; only subscription licenses have one
    pub fn subscription_term(&self) -> Option<Term> {
        if !self.is_subscription() {
            return None;
        }
        Term::nested(&self.attributes, "subscription_term")
    }

    pub fn set_subscription_term(&mut self, term: &Term) {
        self.attributes.set("subscription_term", term.to_value());
    }

    pub fn access_key(&self) -> Option<&str> {
        self.attributes.get_str("access_key")
    }

    pub fn set_access_key(&mut self, access_key: impl Into<String>) {
        self.attributes.set("access_key", access_key.into());
    }

    /// Status: `active`, `expired` or `suspended`
    pub fn status(&self) -> Option<&str> {
        self.attributes.get_str("status")
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.attributes.set("status", status.into());
    }

    /// Maximum number of license keys; `None` means unlimited
    pub fn key_limit(&self) -> Option<i64> {
        self.attributes.get_i64("key_limit")
    }

    pub fn set_key_limit(&mut self, key_limit: Option<i64>) {
        self.attributes
            .set("key_limit", key_limit.map_or(JsonValue::Null, JsonValue::from));
    }

    pub fn expiration_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("expiration_date")
    }

    pub fn set_expiration_date(&mut self, date: Option<NaiveDateTime>) {
        self.attributes.set_datetime("expiration_date", date);
    }

    pub fn expiration_date_grace_period(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("expiration_date_grace_period")
    }

    pub fn set_expiration_date_grace_period(&mut self, date: Option<NaiveDateTime>) {
        self.attributes
            .set_datetime("expiration_date_grace_period", date);
    }

    pub fn is_transferable(&self) -> bool {
        self.attributes.get_bool("transferable")
    }

    pub fn set_transferable(&mut self, transferable: bool) {
        self.attributes.set("transferable", transferable);
    }

    /// Whether a transfer can be requested right now
    pub fn is_transfer_ready(&self) -> bool {
        self.attributes.get_bool("transfer_ready")
    }

    /// Date from which the license may be transferred
    pub fn transferable_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("transferable_date")
    }

    pub fn set_transferable_date(&mut self, date: NaiveDateTime) {
        self.attributes.set_datetime("transferable_date", Some(date));
    }

    pub fn user_id(&self) -> Option<i64> {
        self.attributes.get_i64("user_id")
    }

    pub fn set_user_id(&mut self, user_id: Option<i64>) {
        self.attributes
            .set("user_id", user_id.map_or(JsonValue::Null, JsonValue::from));
    }

    pub fn licensing_plan_id(&self) -> Option<i64> {
        self.attributes.get_i64("licensing_plan_id")
    }

    pub fn set_licensing_plan_id(&mut self, licensing_plan_id: i64) {
        self.attributes.set("licensing_plan_id", licensing_plan_id);
    }

    pub fn project_id(&self) -> Option<i64> {
        self.attributes.get_i64("project_id")
    }

    pub fn project_identifier(&self) -> Option<&str> {
        self.attributes.get_str("project_identifier")
    }

    pub fn created_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("created_date")
    }

    /// Update access restriction kinds (`date`, `term`, `version`)
    pub fn update_access_restrictions(&self) -> Option<&Vec<JsonValue>> {
        self.attributes.get_array("update_access_restrictions")
    }

    pub fn set_update_access_restrictions(&mut self, restrictions: Option<Vec<JsonValue>>) {
        self.attributes.set(
            "update_access_restrictions",
            restrictions.map_or(JsonValue::Null, JsonValue::Array),
        );
    }

    pub fn update_access_expiration_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("update_access_expiration_date")
    }

    pub fn set_update_access_expiration_date(&mut self, date: Option<NaiveDateTime>) {
        self.attributes
            .set_datetime("update_access_expiration_date", date);
    }

    pub fn update_access_expiration_term(&self) -> Option<Term> {
        Term::nested(&self.attributes, "update_access_expiration_term")
    }

    pub fn set_update_access_expiration_term(&mut self, term: &Term) {
        self.attributes.set(
            "update_access_expiration_term.identifier",
            term.identifier().map_or(JsonValue::Null, JsonValue::from),
        );
        self.attributes.set(
            "update_access_expiration_term.length",
            term.length().map_or(JsonValue::Null, JsonValue::from),
        );
    }

    /// Last version (inclusive) the holder may update to
    pub fn update_access_expiration_version(&self) -> Option<&str> {
        self.attributes.get_str("update_access_expiration_version")
    }

    pub fn set_update_access_expiration_version(&mut self, version: Option<&str>) {
        self.attributes.set(
            "update_access_expiration_version",
            version.map_or(JsonValue::Null, JsonValue::from),
        );
    }

    pub fn suspension_expiration_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("suspension_expiration_date")
    }

    pub fn suspension_reason(&self) -> Option<&str> {
        self.attributes.get_str("suspension_reason")
    }

    pub fn is_subscription(&self) -> bool {
        self.license_type() == Some("subscription")
    }

    pub fn is_perpetual(&self) -> bool {
        self.license_type() == Some("perpetual")
    }

    /// Alias of [`is_perpetual`](Self::is_perpetual)
    pub fn is_permanent(&self) -> bool {
        self.is_perpetual()
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some("active")
    }

    pub fn is_expired(&self) -> bool {
        self.status() == Some("expired")
    }

    pub fn is_suspended(&self) -> bool {
        self.status() == Some("suspended")
    }
}

impl Resource for License {
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
