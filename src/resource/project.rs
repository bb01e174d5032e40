//! Projects and their options

use super::{Attributes, Resource};

/// A licensed software project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    attributes: Attributes,
}

impl Project {
    pub fn identifier(&self) -> Option<&str> {
        self.attributes.get_str("identifier")
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str("name")
    }

    /// Latest version published to license holders
    pub fn public_version(&self) -> Option<&str> {
        self.attributes.get_str("public_version")
    }

    pub fn manager(&self) -> Option<&str> {
        self.attributes.get_str("manager")
    }

    pub fn manager_name(&self) -> Option<&str> {
        self.attributes.get_str("manager_name")
    }
}

impl Resource for Project {
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

/// A configurable option defined on a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectOption {
    attributes: Attributes,
}

impl ProjectOption {
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str("name")
    }

    pub fn identifier(&self) -> Option<&str> {
        self.attributes.get_str("identifier")
    }

    pub fn default_value(&self) -> Option<&str> {
        self.attributes.get_str("default_value")
    }

    pub fn option_type(&self) -> Option<&str> {
        self.attributes.get_str("type")
    }
}

impl Resource for ProjectOption {
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
