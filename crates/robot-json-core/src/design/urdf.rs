//! URDF-backed design model
//!
//! Each URDF link becomes a component with a single occurrence named
//! `<link>:1`. A URDF joint's parent link is the joint's second occurrence
//! and its child link the first, so the parent side keys the joint record.

use std::path::Path;

use glam::DVec3;

use super::{Component, Design, DesignHost, DocumentInfo, Joint, Occurrence};
use crate::error::DesignError;
use crate::types::{JointDirection, JointKind, JointMotion, RotationLimits};

/// Version reported for URDF documents, which carry none
pub const URDF_DOCUMENT_VERSION: &str = "1";

/// A URDF robot exposed through the design model
#[derive(Debug, Clone)]
pub struct UrdfDesign {
    document: DocumentInfo,
    components: Vec<Component>,
    joints: Vec<Joint>,
}

impl UrdfDesign {
    /// Load a URDF file
    pub fn load(path: &Path) -> Result<Self, DesignError> {
        if !path.exists() {
            return Err(DesignError::Io(format!("file not found: {}", path.display())));
        }
        let robot =
            urdf_rs::read_file(path).map_err(|e| DesignError::UrdfParse(e.to_string()))?;
        tracing::debug!("Loaded URDF robot '{}' from {:?}", robot.name, path);
        Ok(Self::from_robot(&robot))
    }

    /// Parse URDF text
    pub fn from_urdf_str(content: &str) -> Result<Self, DesignError> {
        let robot =
            urdf_rs::read_from_string(content).map_err(|e| DesignError::UrdfParse(e.to_string()))?;
        Ok(Self::from_robot(&robot))
    }

    /// Convert a parsed URDF robot
    pub fn from_robot(robot: &urdf_rs::Robot) -> Self {
        let components = robot
            .links
            .iter()
            .map(|link| Component::new(link.name.clone(), link.name.clone()))
            .collect();

        let joints = robot
            .joints
            .iter()
            .map(|urdf_joint| Joint {
                name: urdf_joint.name.clone(),
                occurrence_one: Some(link_occurrence(&urdf_joint.child.link)),
                occurrence_two: Some(link_occurrence(&urdf_joint.parent.link)),
                motion: convert_motion(urdf_joint),
                origin: DVec3::from_array(urdf_joint.origin.xyz.0),
            })
            .collect();

        Self {
            document: DocumentInfo {
                name: robot.name.clone(),
                version: URDF_DOCUMENT_VERSION.to_string(),
            },
            components,
            joints,
        }
    }
}

impl Design for UrdfDesign {
    fn all_components(&self) -> Vec<Component> {
        self.components.clone()
    }

    fn all_joints(&self) -> Vec<Joint> {
        self.joints.clone()
    }
}

impl DesignHost for UrdfDesign {
    fn active_document(&self) -> Option<DocumentInfo> {
        Some(self.document.clone())
    }

    fn attribute(&self, _group: &str, _name: &str) -> Option<String> {
        None
    }

    fn active_design(&self) -> Option<&dyn Design> {
        Some(self as &dyn Design)
    }
}

/// The single occurrence of a link component
fn link_occurrence(link: &str) -> Occurrence {
    Occurrence::new(format!("{}:1", link), link)
}

/// Convert a URDF joint's type, axis and limits to a joint motion
fn convert_motion(urdf_joint: &urdf_rs::Joint) -> JointMotion {
    match urdf_joint.joint_type {
        urdf_rs::JointType::Revolute => JointMotion::Revolute {
            axis: JointDirection::from_axis(urdf_joint.axis.xyz.0),
            limits: RotationLimits::new(urdf_joint.limit.lower, urdf_joint.limit.upper),
        },
        urdf_rs::JointType::Fixed => JointMotion::Other(JointKind::Rigid),
        urdf_rs::JointType::Continuous => JointMotion::Other(JointKind::Continuous),
        urdf_rs::JointType::Prismatic => JointMotion::Other(JointKind::Slider),
        urdf_rs::JointType::Planar => JointMotion::Other(JointKind::Planar),
        urdf_rs::JointType::Floating | urdf_rs::JointType::Spherical => {
            JointMotion::Other(JointKind::Ball)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARM_URDF: &str = r#"<?xml version="1.0"?>
<robot name="two_link_arm">
  <link name="base_link"/>
  <link name="upper_arm"/>
  <link name="gripper"/>
  <joint name="shoulder" type="revolute">
    <parent link="base_link"/>
    <child link="upper_arm"/>
    <origin xyz="0 0 0.1" rpy="0 0 0"/>
    <axis xyz="0 1 0"/>
    <limit lower="-1.5" upper="1.5" effort="10" velocity="1"/>
  </joint>
  <joint name="wrist" type="fixed">
    <parent link="upper_arm"/>
    <child link="gripper"/>
    <origin xyz="0.3 0 0" rpy="0 0 0"/>
  </joint>
</robot>
"#;

    #[test]
    fn test_urdf_links_become_components() {
        let design = UrdfDesign::from_urdf_str(ARM_URDF).unwrap();
        let names: Vec<String> = design.all_components().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["base_link", "upper_arm", "gripper"]);
        assert_eq!(design.active_document().unwrap().name, "two_link_arm");
        assert!(design.attribute("Design", "Author").is_none());
    }

    #[test]
    fn test_urdf_joint_sides() {
        let design = UrdfDesign::from_urdf_str(ARM_URDF).unwrap();
        let joints = design.all_joints();
        let shoulder = &joints[0];
        assert_eq!(shoulder.occurrence_one.as_ref().unwrap().name, "upper_arm:1");
        assert_eq!(shoulder.occurrence_two.as_ref().unwrap().name, "base_link:1");
        assert_eq!(
            shoulder.occurrence_two.as_ref().unwrap().component.as_str(),
            "base_link"
        );
        assert_eq!(shoulder.origin, DVec3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn test_urdf_motion_conversion() {
        let design = UrdfDesign::from_urdf_str(ARM_URDF).unwrap();
        let joints = design.all_joints();
        assert_eq!(
            joints[0].motion,
            JointMotion::Revolute {
                axis: JointDirection::Y,
                limits: RotationLimits::new(-1.5, 1.5),
            }
        );
        assert_eq!(joints[1].motion, JointMotion::Other(JointKind::Rigid));
    }

    #[test]
    fn test_invalid_urdf() {
        let result = UrdfDesign::from_urdf_str("<robot");
        assert!(matches!(result, Err(DesignError::UrdfParse(_))));
    }
}
