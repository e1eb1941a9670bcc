//! Core type definitions

mod joint;
mod point;

pub use joint::*;
pub use point::*;
