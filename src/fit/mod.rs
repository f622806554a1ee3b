//! Kinetic-model fitting.
//!
//! Responsibilities:
//!
//! - sample property correlations over a temperature window
//! - fit VHS (viscosity) and VSS (viscosity + self-diffusion) models
//! - estimate parameter spread under source uncertainty (parallel)

pub mod sampling;
pub mod uncertainty;
pub mod vhs;
pub mod vss;

pub use sampling::{ViscositySamples, sample_viscosity};
pub use uncertainty::*;
pub use vhs::{VhsFit, vhs_fit, vhs_model_from_viscosity};
pub use vss::{VssFit, vss_fit, vss_model_from_eta_and_d11, vss_model_from_eta_and_d11_with};
