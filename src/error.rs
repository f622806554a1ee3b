//! Error types.
//!
//! - [`PropertyError`]: a literature correlation could not be evaluated
//! - [`FitError`]: a model fit or closed-form model formula failed
//! - [`AppError`]: application-level error carrying a process exit code
//!
//! Library code returns the typed errors; the binary converts them into an
//! `AppError` so `main` can print a message and exit with a stable code.

use thiserror::Error;

/// Failure to evaluate a property correlation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// Temperature lies outside the data (or validity range) of a correlation.
    #[error("{correlation}: T = {temperature} K is outside [{min}, {max}] K")]
    OutOfRange {
        correlation: &'static str,
        temperature: f64,
        min: f64,
        max: f64,
    },

    /// The tabulated data could not be interpolated.
    #[error("{correlation}: interpolation failed: {message}")]
    Interpolation {
        correlation: &'static str,
        message: String,
    },

    /// No correlation is registered under this id.
    #[error("unknown source '{0}'")]
    UnknownSource(String),

    /// An argument is outside the domain of the formula.
    #[error("{correlation}: {quantity} = {value} is outside the domain of the formula")]
    Domain {
        correlation: &'static str,
        quantity: &'static str,
        value: f64,
    },
}

/// Failure of a kinetic-model fit or closed-form model formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("invalid temperature window [{t_min}, {t_max}] K (need 0 < T_min < T_max)")]
    InvalidRange { t_min: f64, t_max: f64 },

    /// A quantity that must be positive and finite is not.
    #[error("{quantity} must be positive and finite, got {value}")]
    Domain { quantity: &'static str, value: f64 },

    /// A sampled property value is not positive and finite.
    #[error("{quantity} at T = {temperature} K must be positive and finite, got {value}")]
    BadSample {
        quantity: &'static str,
        temperature: f64,
        value: f64,
    },

    #[error("insufficient data: need at least {needed} distinct points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A closed-form back-substitution divides by zero.
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("negative radicand in {0}")]
    NegativeRadicand(&'static str),

    /// The fitted VSS scattering exponent is not physically meaningful.
    #[error("fitted alpha = {alpha} is not positive")]
    ImplausibleAlpha { alpha: f64 },

    #[error("least-squares solve failed")]
    Solve,

    #[error("invalid uncertainty settings: {0}")]
    InvalidUncertainty(String),

    #[error(transparent)]
    Property(#[from] PropertyError),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<PropertyError> for AppError {
    fn from(err: PropertyError) -> Self {
        let code = match err {
            PropertyError::UnknownSource(_) => 2,
            _ => 3,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let code = match &err {
            FitError::InvalidRange { .. } | FitError::InvalidUncertainty(_) => 2,
            FitError::Domain { .. } | FitError::BadSample { .. } => 3,
            FitError::Property(inner) => return AppError::from(inner.clone()),
            _ => 4,
        };
        AppError::new(code, err.to_string())
    }
}
