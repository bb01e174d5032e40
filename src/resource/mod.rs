//! Resource module
//!
//! Typed views over the API's resources. Every resource wraps an
//! [`Attributes`] mapping; the typed getters and setters are thin mappings
//! onto (dotted) attribute keys.
//!
//! # Resources
//!
//! - [`License`] and [`LicenseKey`]
//! - [`LicensingPlan`] and [`Term`]
//! - [`Project`] and [`ProjectOption`]
//! - [`User`]

mod attributes;
mod license;
mod license_key;
mod licensing_plan;
mod project;
mod term;
mod user;

pub use attributes::{dot_get, dot_set, Attributes, DATETIME_FORMAT};
pub use license::License;
pub use license_key::LicenseKey;
pub use licensing_plan::LicensingPlan;
pub use project::{Project, ProjectOption};
pub use term::Term;
pub use user::User;

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};

/// A remote entity represented by its attribute mapping
pub trait Resource: Sized {
    /// Wrap an attribute mapping
    fn from_attributes(attributes: Attributes) -> Self;

    /// The attribute mapping
    fn attributes(&self) -> &Attributes;

    /// Mutable access to the attribute mapping
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Build the resource from a raw JSON value, which must be an object
    fn from_value(value: JsonValue) -> Result<Self> {
        Attributes::from_value(value).map(Self::from_attributes)
    }

    /// Build the resource from an attribute mapping
    fn from_map(map: JsonObject) -> Self {
        Self::from_attributes(Attributes::new(map))
    }

    /// The resource identifier, if it has been assigned one
    fn id(&self) -> Option<i64> {
        self.attributes().id()
    }

    /// The current attributes as a JSON value
    fn to_value(&self) -> JsonValue {
        self.attributes().to_value()
    }

    /// Top-level attributes changed since construction
    fn changes(&self) -> JsonObject {
        self.attributes().changes()
    }

    /// Whether the resource has local modifications
    fn has_changes(&self) -> bool {
        self.attributes().has_changes()
    }

    /// Hypermedia link by relation name (`self` for the canonical URL)
    fn link(&self, name: &str) -> Option<&str> {
        self.attributes().link(name)
    }
}

/// Raw attribute mappings are resources without typed accessors
impl Resource for Attributes {
    fn from_attributes(attributes: Attributes) -> Self {
        attributes
    }

    fn attributes(&self) -> &Attributes {
        self
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self
    }
}

#[cfg(test)]
mod tests;
