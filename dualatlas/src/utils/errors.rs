use thiserror::Error;

/// Errors surfaced at the crate's fallible boundaries. Arithmetic itself
/// never errors: out-of-domain inputs propagate NaN/Inf exactly as native
/// floating point does.
#[derive(Debug, Error)]
pub enum DualError {
    #[error("Error while parsing: {0}")]
    ParsingError(#[from] std::num::ParseFloatError),
}

pub type Result<T> = std::result::Result<T, DualError>;
