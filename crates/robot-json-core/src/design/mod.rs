//! Read-only design model interface
//!
//! The exporter never talks to a CAD host directly. It reads a host through
//! [`DesignHost`] and [`Design`], which expose exactly the fields the joint
//! graph needs. Two backends are provided:
//! - [`DocumentFile`]: a serialized design snapshot (RON or JSON)
//! - [`UrdfDesign`]: a URDF robot, one component per link

mod fixture;
mod urdf;

pub use fixture::*;
pub use urdf::*;

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::types::JointMotion;

/// Identity of a component, unique within a design
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named component definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
}

impl Component {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::new(id),
            name: name.into(),
        }
    }
}

/// A placed instance of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Host name, e.g. `"Link:1"`
    pub name: String,
    /// Owning component
    pub component: ComponentId,
}

impl Occurrence {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: ComponentId::new(component),
        }
    }
}

/// A joint as seen through the design model
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    pub occurrence_one: Option<Occurrence>,
    pub occurrence_two: Option<Occurrence>,
    pub motion: JointMotion,
    pub origin: DVec3,
}

/// Identity metadata of the active document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    pub version: String,
}

/// Custom attribute attached to a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub group: String,
    pub name: String,
    pub value: String,
}

/// The design product: components and joints
pub trait Design {
    /// Every component in the design tree, in host order
    fn all_components(&self) -> Vec<Component>;

    /// Every joint of the assembly, in host order
    fn all_joints(&self) -> Vec<Joint>;
}

/// The application side of a host: active document and product
pub trait DesignHost {
    /// Identity of the active document, if any
    fn active_document(&self) -> Option<DocumentInfo>;

    /// Look up a custom attribute on the active document
    fn attribute(&self, group: &str, name: &str) -> Option<String>;

    /// The active product, if it is a design
    fn active_design(&self) -> Option<&dyn Design>;
}

/// Open a design file, choosing the backend from the extension
pub fn open_design(path: &Path) -> Result<Box<dyn DesignHost>, DesignError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ron" | "json" => Ok(Box::new(DocumentFile::load(path)?)),
        "urdf" | "xml" => Ok(Box::new(UrdfDesign::load(path)?)),
        _ => Err(DesignError::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_design_unsupported_format() {
        let result = open_design(Path::new("robot.step"));
        assert!(matches!(result, Err(DesignError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_open_design_missing_file() {
        let result = open_design(Path::new("/nonexistent/robot.ron"));
        assert!(matches!(result, Err(DesignError::Io(_))));
    }

    #[test]
    fn test_component_id_display() {
        let component = Component::new("c42", "base_link");
        assert_eq!(component.id.to_string(), "c42");
        assert_eq!(component.id.as_str(), "c42");
    }
}
