//! Error types for filter construction

use thiserror::Error;

/// Errors raised when building a filter whose size is only known at run time
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A window must hold at least one sample
    #[error("Window size must be greater than 0")]
    ZeroCapacity,
}

/// Convenience alias for results carrying [`Error`]
pub type Result<T> = core::result::Result<T, Error>;
