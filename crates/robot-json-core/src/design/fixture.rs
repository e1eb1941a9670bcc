//! Serialized design snapshots
//!
//! A [`DocumentFile`] captures what a CAD host would report for its active
//! document: identity, custom attributes and (optionally) a design with its
//! components, occurrences and joints. Joints refer to occurrences by name.

use std::collections::HashMap;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{Attribute, Component, Design, DesignHost, DocumentInfo, Joint, Occurrence};
use crate::error::DesignError;
use crate::types::JointMotion;

/// A joint entry in a design snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureJoint {
    pub name: String,
    #[serde(default)]
    pub occurrence_one: Option<String>,
    #[serde(default)]
    pub occurrence_two: Option<String>,
    #[serde(default)]
    pub motion: JointMotion,
    /// Joint origin, written as an `(x, y, z)` tuple
    #[serde(default)]
    pub origin: DVec3,
}

impl FixtureJoint {
    /// Create a joint connecting `occurrence_one` to `occurrence_two`
    pub fn new(
        name: impl Into<String>,
        occurrence_one: impl Into<String>,
        occurrence_two: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            occurrence_one: Some(occurrence_one.into()),
            occurrence_two: Some(occurrence_two.into()),
            motion: JointMotion::default(),
            origin: DVec3::ZERO,
        }
    }

    pub fn motion(mut self, motion: JointMotion) -> Self {
        self.motion = motion;
        self
    }

    pub fn origin(mut self, x: f64, y: f64, z: f64) -> Self {
        self.origin = DVec3::new(x, y, z);
        self
    }
}

/// Components, occurrences and joints of a design snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignFixture {
    pub components: Vec<Component>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
    #[serde(default)]
    pub joints: Vec<FixtureJoint>,
}

impl DesignFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.components.push(Component::new(id, name));
        self
    }

    pub fn with_occurrence(mut self, name: impl Into<String>, component: impl Into<String>) -> Self {
        self.occurrences.push(Occurrence::new(name, component));
        self
    }

    pub fn with_joint(mut self, joint: FixtureJoint) -> Self {
        self.joints.push(joint);
        self
    }

    /// Check that every reference resolves
    pub fn validate(&self) -> Result<(), DesignError> {
        for occurrence in &self.occurrences {
            if !self.components.iter().any(|c| c.id == occurrence.component) {
                return Err(DesignError::UnknownComponent {
                    occurrence: occurrence.name.clone(),
                    component: occurrence.component.to_string(),
                });
            }
        }

        for joint in &self.joints {
            let names = [&joint.occurrence_one, &joint.occurrence_two];
            for name in names.into_iter().flatten() {
                if !self.occurrences.iter().any(|o| &o.name == name) {
                    return Err(DesignError::UnknownOccurrence {
                        joint: joint.name.clone(),
                        occurrence: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Design for DesignFixture {
    fn all_components(&self) -> Vec<Component> {
        self.components.clone()
    }

    fn all_joints(&self) -> Vec<Joint> {
        let by_name: HashMap<&str, &Occurrence> = self
            .occurrences
            .iter()
            .rev()
            .map(|o| (o.name.as_str(), o))
            .collect();
        let resolve = |name: &Option<String>| {
            name.as_deref()
                .and_then(|n| by_name.get(n))
                .map(|o| (*o).clone())
        };

        self.joints
            .iter()
            .map(|joint| Joint {
                name: joint.name.clone(),
                occurrence_one: resolve(&joint.occurrence_one),
                occurrence_two: resolve(&joint.occurrence_two),
                motion: joint.motion,
                origin: joint.origin,
            })
            .collect()
    }
}

/// A design snapshot file: active document plus optional design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// `None` when no document is open
    #[serde(default)]
    pub document: Option<DocumentInfo>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// `None` when the active product is not a design
    #[serde(default)]
    pub design: Option<DesignFixture>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            document: Some(DocumentInfo {
                name: name.into(),
                version: version.into(),
            }),
            attributes: Vec::new(),
            design: None,
        }
    }

    pub fn with_attribute(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push(Attribute {
            group: group.into(),
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_design(mut self, design: DesignFixture) -> Self {
        self.design = Some(design);
        self
    }

    /// Load a snapshot from a `.ron` or `.json` file
    pub fn load(path: &Path) -> Result<Self, DesignError> {
        let content = std::fs::read_to_string(path).map_err(|e| DesignError::Io(e.to_string()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_ron_str(&content)?
        };
        tracing::debug!("Loaded design snapshot from {:?}", path);
        Ok(file)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, DesignError> {
        let file: Self = ron::from_str(content).map_err(|e| DesignError::Parse(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DesignError> {
        let file: Self =
            serde_json::from_str(content).map_err(|e| DesignError::Parse(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), DesignError> {
        match &self.design {
            Some(design) => design.validate(),
            None => Ok(()),
        }
    }
}

impl DesignHost for DocumentFile {
    fn active_document(&self) -> Option<DocumentInfo> {
        self.document.clone()
    }

    fn attribute(&self, group: &str, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|a| a.group == group && a.name == name)
            .map(|a| a.value.clone())
    }

    fn active_design(&self) -> Option<&dyn Design> {
        self.design.as_ref().map(|d| d as &dyn Design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JointDirection, JointKind, RotationLimits};

    const SNAPSHOT: &str = r#"(
        document: Some((name: "arm", version: "v3")),
        attributes: [(group: "Design", name: "Author", value: "Ada")],
        design: Some((
            components: [(id: "c0", name: "base_link"), (id: "c1", name: "Upper")],
            occurrences: [(name: "base_link:1", component: "c0"), (name: "Upper:1", component: "c1")],
            joints: [(
                name: "Rev1",
                occurrence_one: Some("Upper:1"),
                occurrence_two: Some("base_link:1"),
                motion: Revolute(axis: Z, limits: (minimum: -1.0, maximum: 1.0)),
                origin: (0.0, 0.0, 5.0),
            )],
        )),
    )"#;

    #[test]
    fn test_parse_ron_snapshot() {
        let file = DocumentFile::from_ron_str(SNAPSHOT).unwrap();
        assert_eq!(file.active_document().unwrap().name, "arm");
        assert_eq!(file.attribute("Design", "Author"), Some("Ada".to_string()));
        assert_eq!(file.attribute("Design", "Owner"), None);

        let design = file.active_design().unwrap();
        let joints = design.all_joints();
        assert_eq!(joints.len(), 1);
        assert_eq!(joints[0].occurrence_two.as_ref().unwrap().name, "base_link:1");
        assert_eq!(
            joints[0].motion,
            JointMotion::Revolute {
                axis: JointDirection::Z,
                limits: RotationLimits::new(-1.0, 1.0),
            }
        );
        assert_eq!(joints[0].origin, DVec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_parse_json_snapshot() {
        let json = r#"{
            "document": {"name": "arm", "version": "1"},
            "design": {
                "components": [{"id": "c0", "name": "base_link"}],
                "occurrences": [{"name": "base_link:1", "component": "c0"}],
                "joints": [{
                    "name": "J",
                    "occurrence_two": "base_link:1",
                    "motion": {"Other": "Slider"},
                    "origin": [1.5, 0.0, -2.0]
                }]
            }
        }"#;
        let file = DocumentFile::from_json_str(json).unwrap();
        let joints = file.active_design().unwrap().all_joints();
        assert!(joints[0].occurrence_one.is_none());
        assert_eq!(joints[0].motion, JointMotion::Other(JointKind::Slider));
        assert_eq!(joints[0].origin, DVec3::new(1.5, 0.0, -2.0));
    }

    #[test]
    fn test_snapshot_without_design() {
        let file = DocumentFile::from_ron_str(r#"(document: Some((name: "drawing", version: "1")))"#)
            .unwrap();
        assert!(file.active_design().is_none());
        assert!(file.active_document().is_some());
    }

    #[test]
    fn test_unknown_component_rejected() {
        let design = DesignFixture::new()
            .with_component("c0", "base_link")
            .with_occurrence("Arm:1", "c9");
        let result = design.validate();
        assert!(matches!(result, Err(DesignError::UnknownComponent { .. })));
    }

    #[test]
    fn test_unknown_occurrence_rejected() {
        let design = DesignFixture::new()
            .with_component("c0", "base_link")
            .with_occurrence("base_link:1", "c0")
            .with_joint(FixtureJoint::new("J", "Ghost:1", "base_link:1"));
        let result = design.validate();
        assert!(matches!(
            result,
            Err(DesignError::UnknownOccurrence { ref occurrence, .. }) if occurrence == "Ghost:1"
        ));
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let result = DocumentFile::from_ron_str("(document: ");
        assert!(matches!(result, Err(DesignError::Parse(_))));
    }
}
