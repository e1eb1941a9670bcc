//! Origin point type definition

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Joint origin in the design's native length units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<DVec3> for Origin {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
