//! Export settings

use serde::{Deserialize, Serialize};

/// Description written to every descriptor
pub const DEFAULT_DESCRIPTION: &str = "Fusion 360 robot descriptor generated with SimpleJointsYAML";

/// Settings controlling how a descriptor is built and written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    /// Exact, case-sensitive name of the root component
    pub root_component: String,
    /// Attribute group holding the author
    pub author_group: String,
    /// Attribute name holding the author
    pub author_attribute: String,
    /// Author used when the attribute is absent
    pub default_author: String,
    pub description: String,
    /// JSON indentation width in spaces
    pub indent: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            root_component: "base_link".to_string(),
            author_group: "Design".to_string(),
            author_attribute: "Author".to_string(),
            default_author: "Unknown".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            indent: 4,
        }
    }
}
