use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the simulation boundary.
///
/// The physics itself is infallible; these cover bad parameters handed in by
/// callers and failures while loading parameter files.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Parameter file could not be parsed.
    #[error("invalid parameter file: {0}")]
    Config(#[from] serde_json::Error),

    /// Parameter file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
