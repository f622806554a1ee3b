//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - physical constants and unit conversions (`constants`)
//! - the fit window and fitted kinetic model value types (`VhsModel`, `VssModel`)
//! - run configuration and the saved model file schema

pub mod constants;
pub mod types;

pub use types::*;
