//! Users (license holders)

use super::{Attributes, Resource};

/// A user of the licensing service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    attributes: Attributes,
}

impl User {
    pub fn email(&self) -> Option<&str> {
        self.attributes.get_str("email")
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.attributes.set("email", email.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str("name")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.attributes.set("name", name.into());
    }

    /// Whether the user may sign in to the customer area
    pub fn authentication(&self) -> bool {
        self.attributes.get_bool("authentication")
    }

    pub fn set_authentication(&mut self, enabled: bool) {
        self.attributes.set("authentication", enabled);
    }

    /// Set the password sent on create; the API never returns it
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.attributes.set("password", password.into());
    }
}

impl Resource for User {
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
