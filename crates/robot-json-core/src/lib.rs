//! Robot JSON Core
//!
//! This crate extracts a robot's kinematic joint graph from a CAD design
//! and serializes it as a JSON robot descriptor:
//! - design: read-only design model interface and its backends
//! - exporter: joint graph traversal and descriptor export
//! - descriptor: output types and JSON serialization

pub mod descriptor;
pub mod design;
pub mod error;
pub mod exporter;
pub mod logger;
pub mod prompt;
pub mod settings;
pub mod types;

pub use descriptor::*;
pub use design::*;
pub use error::*;
pub use exporter::*;
pub use logger::*;
pub use prompt::*;
pub use settings::*;
pub use types::*;
