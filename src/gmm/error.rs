//! Error types for mixture-model fitting.

use std::fmt;

/// Result type for mixture-model operations.
pub type GmmResult<T> = Result<T, GmmError>;

/// Errors that can occur while evaluating densities or running EM steps.
#[derive(Debug, Clone)]
pub enum GmmError {
    /// A component's covariance matrix is non-invertible or has a
    /// non-positive determinant (covariance collapse).
    SingularCovariance { component: usize },

    /// A component's effective point count collapsed to zero.
    EmptyComponent { component: usize },

    /// Malformed input (mismatched shapes, bad weights, bad options).
    InvalidInput { arg: &'static str, reason: String },

    /// A backend tensor operation failed.
    Numeric { message: String },
}

impl fmt::Display for GmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularCovariance { component } => {
                write!(
                    f,
                    "Covariance of component {} is singular (determinant <= 0)",
                    component
                )
            }
            Self::EmptyComponent { component } => {
                write!(
                    f,
                    "Component {} received zero responsibility mass",
                    component
                )
            }
            Self::InvalidInput { arg, reason } => {
                write!(f, "Invalid input '{}': {}", arg, reason)
            }
            Self::Numeric { message } => {
                write!(f, "Numeric error: {}", message)
            }
        }
    }
}

impl std::error::Error for GmmError {}

impl From<numr::error::Error> for GmmError {
    fn from(err: numr::error::Error) -> Self {
        Self::Numeric {
            message: err.to_string(),
        }
    }
}

/// Failure of a full EM fit.
///
/// Carries the iteration count and the partial log-likelihood trace
/// accumulated before the error, for diagnosing where the fit fell over.
#[derive(Debug, Clone)]
pub struct FitError {
    /// The underlying error.
    pub error: GmmError,
    /// Completed EM iterations before the failure.
    pub iterations: usize,
    /// Log-likelihood values of the completed iterations.
    pub trace: Vec<f64>,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EM fit failed after {} iterations: {}",
            self.iterations, self.error
        )
    }
}

impl std::error::Error for FitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<GmmError> for FitError {
    fn from(error: GmmError) -> Self {
        Self {
            error,
            iterations: 0,
            trace: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GmmError::SingularCovariance { component: 2 };
        assert!(err.to_string().contains("component 2"));
        assert!(err.to_string().contains("singular"));

        let err = GmmError::EmptyComponent { component: 0 };
        assert!(err.to_string().contains("Component 0"));

        let err = GmmError::InvalidInput {
            arg: "means",
            reason: "expected [k, d]".to_string(),
        };
        assert!(err.to_string().contains("means"));
        assert!(err.to_string().contains("[k, d]"));
    }

    #[test]
    fn test_fit_error_carries_diagnostics() {
        let err = FitError {
            error: GmmError::EmptyComponent { component: 1 },
            iterations: 7,
            trace: vec![-10.0, -8.0],
        };
        assert!(err.to_string().contains("after 7 iterations"));
        assert_eq!(err.trace.len(), 2);

        let err: FitError = GmmError::InvalidInput {
            arg: "data",
            reason: "empty".to_string(),
        }
        .into();
        assert_eq!(err.iterations, 0);
        assert!(err.trace.is_empty());
    }
}
