//! Input/output helpers.
//!
//! - fitted model JSON read/write (`model`)
//! - comparison table CSV export (`export`)

pub mod export;
pub mod model;

pub use export::*;
pub use model::*;
