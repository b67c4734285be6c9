//! Gaussian mixture model fitting via expectation-maximization.
//!
//! The algorithm is split into four pure kernels, composed by the driver:
//!
//! - density evaluator: batched multivariate Gaussian log-density
//! - expectation engine: joint log-likelihoods, log-sum-exp normalized into
//!   a row-stochastic responsibility matrix
//! - maximization engine: weighted re-estimation of means, covariances, and
//!   mixing weights
//! - convergence driver: alternates E/M, tracks the log-likelihood trace,
//!   stops on tolerance or the iteration cap
//!
//! All kernels are generic over numr's `Runtime`; the CPU backend implements
//! [`EmAlgorithms`] for `CpuClient`.
//!
//! Covariance collapse is an error, not something to paper over: a singular
//! covariance or an empty component aborts the fit with the offending
//! component index and the partial log-likelihood trace.

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

mod error;

pub use error::{FitError, GmmError, GmmResult};
pub use traits::gmm::{EmAlgorithms, EmOptions, FitStatus, GmmFit, GmmParams};
pub use validation::*;
