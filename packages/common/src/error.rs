use thiserror::Error;

/// A diagnostic message tagged with the subsystem that raised it.
///
/// Displays as `[scope] message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{scope}] {message}")]
pub struct ScopedError {
    pub scope: String,
    pub message: String,
}

impl ScopedError {
    pub fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

/// Common error type for fallible plume operations
#[derive(Error, Debug)]
pub enum PlumeError {
    #[error(transparent)]
    Scoped(#[from] ScopedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_error_display() {
        let err = ScopedError::new("VNode", "[getNormalizedProps] must be a VNode");
        assert_eq!(err.to_string(), "[VNode] [getNormalizedProps] must be a VNode");
    }

    #[test]
    fn test_scoped_error_is_transparent_in_plume_error() {
        let err: PlumeError = ScopedError::new("Switch", "bad value").into();
        assert_eq!(err.to_string(), "[Switch] bad value");
    }

    #[test]
    fn test_json_error_converts() {
        let err: PlumeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, PlumeError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
