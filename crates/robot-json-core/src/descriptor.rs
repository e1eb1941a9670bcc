//! Robot descriptor output types and JSON serialization

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::types::Origin;

/// Rotation limits of a revolute joint, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub min: f64,
    pub max: f64,
}

/// One entry of the joints mapping, keyed by the sanitized "from" occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointRecord {
    pub id: usize,
    pub is_root: bool,
    pub origin: Origin,
    pub linked_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[i32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

/// Joint records in first-encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointTable {
    entries: Vec<(String, JointRecord)>,
    index: HashMap<String, usize>,
}

impl JointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JointRecord> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JointRecord> {
        self.index.get(key).map(|&i| &mut self.entries[i].1)
    }

    /// Insert a record, replacing any record under the same key in place
    pub fn insert(&mut self, key: impl Into<String>, record: JointRecord) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = record,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JointRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}

impl Serialize for JointTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

/// Descriptor header fields
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
}

/// The top-level JSON document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotDescriptor {
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub joints: JointTable,
}

impl RobotDescriptor {
    pub fn new(header: Header, joints: JointTable) -> Self {
        Self {
            name: header.name,
            version: header.version,
            author: header.author,
            description: header.description,
            joints,
        }
    }

    /// Serialize to JSON indented by `indent` spaces
    pub fn to_json(&self, indent: usize) -> ExportResult<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
