use crate::error::PlumeError;

/// Common Result type alias
pub type PlumeResult<T> = Result<T, PlumeError>;
