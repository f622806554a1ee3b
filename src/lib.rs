//! `livapor` library crate.
//!
//! Literature correlations for lithium vapor properties, Variable Hard Sphere
//! and Variable Soft Sphere kinetic models fit to them, and the reporting used
//! by the `livapor` binary. The binary is a thin wrapper around this library so
//! that the fitting code is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;

pub use data::{Source, find_source, sources};
pub use domain::{FitWindow, FittedModel, SchmidtReference, VhsModel, VssModel};
pub use error::{AppError, FitError, PropertyError};
pub use fit::{vhs_model_from_viscosity, vss_model_from_eta_and_d11};
pub use models::{
    eta_bird_vhs, eta_bird_vss, reference_diameter_vhs, reference_diameter_vss, schmidt_number,
    schmidt_number_from_vss, thermal_conductivity_bird_vhs,
};
