//! Error types

use crate::types::JointKind;

/// Errors that can occur while loading a design model
#[derive(Debug, Clone, thiserror::Error)]
pub enum DesignError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse design: {0}")]
    Parse(String),

    #[error("Failed to parse URDF: {0}")]
    UrdfParse(String),

    #[error("Unsupported design format: {0} (expected .ron, .json, .urdf or .xml)")]
    UnsupportedFormat(String),

    #[error("Occurrence '{occurrence}' refers to unknown component '{component}'")]
    UnknownComponent {
        occurrence: String,
        component: String,
    },

    #[error("Joint '{joint}' refers to unknown occurrence '{occurrence}'")]
    UnknownOccurrence { joint: String, occurrence: String },
}

/// Errors that can occur during descriptor export
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("No active Fusion design")]
    NoActiveDesign,

    #[error("No component named \"{name}\" found in the design.")]
    MissingRootComponent { name: String },

    /// Reported as a warning only; traversal continues without rotation data
    #[error("Joint {joint} - unsupported joint type {kind}")]
    UnsupportedJointType { joint: String, kind: JointKind },

    #[error("Failed to serialize descriptor: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to load design")]
    Design(#[from] DesignError),
}

impl ExportError {
    /// Errors shown as a plain message rather than a failure report
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ExportError::NoActiveDesign | ExportError::MissingRootComponent { .. }
        )
    }
}

/// Render an error and its source chain, one cause per line
pub fn error_report(error: &dyn std::error::Error) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        report.push_str("\nCaused by: ");
        report.push_str(&cause.to_string());
        source = cause.source();
    }
    report
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
