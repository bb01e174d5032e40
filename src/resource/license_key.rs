//! License keys

use super::{Attributes, Resource};
use chrono::NaiveDateTime;

/// An activation of a license on a host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseKey {
    attributes: Attributes,
}

impl LicenseKey {
    pub fn license_id(&self) -> Option<i64> {
        self.attributes.get_i64("license_id")
    }

    pub fn set_license_id(&mut self, license_id: i64) {
        self.attributes.set("license_id", license_id);
    }

    /// Host (domain or machine) the key is bound to
    pub fn host(&self) -> Option<&str> {
        self.attributes.get_str("host")
    }

    pub fn set_host(&mut self, host: Option<&str>) {
        self.attributes.set("host", host.map(String::from));
    }

    /// The key string; also its address on the API
    pub fn key(&self) -> Option<&str> {
        self.attributes.get_str("key")
    }

    pub fn status(&self) -> Option<&str> {
        self.attributes.get_str("status")
    }

    pub fn suspension_reason(&self) -> Option<&str> {
        self.attributes.get_str("suspension_reason")
    }

    pub fn suspension_expiration_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("suspension_expiration_date")
    }

    pub fn created_date(&self) -> Option<NaiveDateTime> {
        self.attributes.get_datetime("created_date")
    }
}

impl Resource for LicenseKey {
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
