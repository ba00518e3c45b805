//! CLI Commands
//!
//! Vector emission, organized per primitive family.

mod emit;

pub use emit::{emit, Primitive};
