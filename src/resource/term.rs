//! Subscription and update-access terms

use super::{Attributes, Resource};
use crate::types::{JsonObject, JsonValue};

/// A duration expressed as a term identifier (`month`, `year`, ...) and a length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    attributes: Attributes,
}

impl Term {
    /// Create a term from its identifier and length
    pub fn new(identifier: Option<&str>, length: Option<i64>) -> Self {
        let mut map = JsonObject::new();
        map.insert(
            "identifier".to_string(),
            identifier.map_or(JsonValue::Null, JsonValue::from),
        );
        map.insert(
            "length".to_string(),
            length.map_or(JsonValue::Null, JsonValue::from),
        );
        Self::from_map(map)
    }

    /// Read a term stored under `prefix` (e.g. `subscription_term`) of another
    /// resource; `None` when neither identifier nor length is present
    pub(crate) fn nested(attributes: &Attributes, prefix: &str) -> Option<Self> {
        let identifier = attributes.get_str(&format!("{prefix}.identifier"));
        let length = attributes.get_i64(&format!("{prefix}.length"));
        if identifier.is_none() && length.is_none() {
            return None;
        }
        Some(Self::new(identifier, length))
    }

    pub fn identifier(&self) -> Option<&str> {
        self.attributes.get_str("identifier")
    }

    pub fn length(&self) -> Option<i64> {
        self.attributes.get_i64("length")
    }

    pub fn singular_name(&self) -> Option<&str> {
        self.attributes.get_str("name.singular")
    }

    pub fn plural_name(&self) -> Option<&str> {
        self.attributes.get_str("name.plural")
    }

    /// Estimated length of the term in minutes
    pub fn estimated_minutes(&self) -> Option<i64> {
        self.attributes.get_i64("length_estimate.minutes")
    }

    /// Estimated length of the term in hours
    pub fn estimated_hours(&self) -> Option<i64> {
        self.attributes.get_i64("length_estimate.hours")
    }

    /// Estimated length of the term in days
    pub fn estimated_days(&self) -> Option<i64> {
        self.attributes.get_i64("length_estimate.days")
    }
}

impl Resource for Term {
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
