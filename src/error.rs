use thiserror::Error;

/// Errors produced while setting up a quadrature run.
///
/// Evaluation itself never errors: floating-point faults such as a sample
/// landing on a pole follow IEEE 754 semantics and surface as NaN in the
/// result instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The interval is inverted or empty.
    #[error("invalid interval [{lower},{upper}]: lower bound must be strictly below upper bound")]
    EmptyInterval { lower: f64, upper: f64 },

    /// A bound is NaN or infinite.
    #[error("non-finite bound in interval [{lower},{upper}]")]
    NonFiniteBound { lower: f64, upper: f64 },

    /// The step size is zero, negative, NaN or infinite.
    #[error("invalid step {step}: step size must be positive and finite")]
    InvalidStep { step: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
