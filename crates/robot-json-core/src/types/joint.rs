//! Joint motion type definitions

use serde::{Deserialize, Serialize};

/// Non-revolute joint kinds a design can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JointKind {
    #[default]
    Rigid,
    Slider,
    Cylindrical,
    PinSlot,
    Planar,
    Ball,
    Continuous,
}

impl JointKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            JointKind::Rigid => "Rigid",
            JointKind::Slider => "Slider",
            JointKind::Cylindrical => "Cylindrical",
            JointKind::PinSlot => "Pin-Slot",
            JointKind::Planar => "Planar",
            JointKind::Ball => "Ball",
            JointKind::Continuous => "Continuous",
        }
    }
}

impl std::fmt::Display for JointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Direction a revolute joint rotates about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointDirection {
    X,
    Y,
    Z,
    /// Any direction that is not a principal axis
    Custom,
}

impl JointDirection {
    /// Unit axis tuple written to the descriptor, `[0, 0, 0]` for custom directions
    pub fn rotation_tuple(&self) -> [i32; 3] {
        match self {
            JointDirection::X => [1, 0, 0],
            JointDirection::Y => [0, 1, 0],
            JointDirection::Z => [0, 0, 1],
            JointDirection::Custom => [0, 0, 0],
        }
    }

    /// Classify an axis vector. Only exact unit principal axes are recognized.
    pub fn from_axis(axis: [f64; 3]) -> Self {
        if axis == [1.0, 0.0, 0.0] {
            JointDirection::X
        } else if axis == [0.0, 1.0, 0.0] {
            JointDirection::Y
        } else if axis == [0.0, 0.0, 1.0] {
            JointDirection::Z
        } else {
            JointDirection::Custom
        }
    }
}

/// Rotation limits in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationLimits {
    pub minimum: f64,
    pub maximum: f64,
}

impl Default for RotationLimits {
    fn default() -> Self {
        Self {
            minimum: -std::f64::consts::PI,
            maximum: std::f64::consts::PI,
        }
    }
}

impl RotationLimits {
    /// Create limits with specified range
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Limits converted to degrees as `(min, max)`
    pub fn to_degrees(&self) -> (f64, f64) {
        (radians_to_degrees(self.minimum), radians_to_degrees(self.maximum))
    }
}

/// Multiply by 180/π.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Motion of a joint as reported by the design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JointMotion {
    Revolute {
        axis: JointDirection,
        #[serde(default)]
        limits: RotationLimits,
    },
    Other(JointKind),
}

impl Default for JointMotion {
    fn default() -> Self {
        JointMotion::Other(JointKind::Rigid)
    }
}
