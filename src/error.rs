use thiserror::Error;

/// Errors raised at the boundary between user input and the pricing engine.
///
/// The engine itself never fails; these variants describe input that must not
/// reach it, plus I/O failures of the interactive session.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("invalid parameter {name}={value}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("malformed input for {field}: {input:?} is not a number")]
    MalformedInput { field: &'static str, input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;
