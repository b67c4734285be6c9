//! Gaussian Mixture Model trait and types.

use crate::gmm::error::{FitError, GmmResult};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Options for EM fitting.
#[derive(Debug, Clone)]
pub struct EmOptions {
    /// Convergence tolerance on the absolute change in total data
    /// log-likelihood between iterations.
    pub tol: f64,
    /// Maximum EM iterations before the fit stops as
    /// [`FitStatus::MaxIterationsReached`].
    pub max_iter: usize,
}

impl Default for EmOptions {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 300,
        }
    }
}

/// Parameters of a Gaussian mixture: one full-covariance component per row.
#[derive(Debug, Clone)]
pub struct GmmParams<R: Runtime> {
    /// Component means [k, d].
    pub means: Tensor<R>,
    /// Component covariances [k, d, d], each slice symmetric
    /// positive-definite.
    pub covariances: Tensor<R>,
    /// Mixing weights [k] (sum = 1).
    pub weights: Tensor<R>,
}

/// Terminal state of a fit that produced a usable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// The log-likelihood change fell below the tolerance.
    Converged,
    /// The iteration cap was hit before convergence. Parameter estimates
    /// are the last M-step output and may still be useful.
    MaxIterationsReached,
}

/// Result of an EM fit.
#[derive(Debug, Clone)]
pub struct GmmFit<R: Runtime> {
    /// Fitted means [k, d].
    pub means: Tensor<R>,
    /// Fitted covariances [k, d, d].
    pub covariances: Tensor<R>,
    /// Fitted mixing weights [k].
    pub weights: Tensor<R>,
    /// Posterior responsibilities [n, k] under the final parameters.
    pub responsibilities: Tensor<R>,
    /// Total data log-likelihood per completed iteration, excluding the
    /// initial sentinel.
    pub log_likelihood: Vec<f64>,
    /// Number of completed iterations.
    pub n_iter: usize,
    /// How the fit terminated.
    pub status: FitStatus,
}

/// Expectation-Maximization algorithms for Gaussian mixtures.
pub trait EmAlgorithms<R: Runtime> {
    /// Fit a mixture to data [n, d] from initial parameter guesses.
    ///
    /// On failure, the error carries the completed iteration count and the
    /// partial log-likelihood trace.
    fn em_fit(
        &self,
        data: &Tensor<R>,
        init: &GmmParams<R>,
        options: &EmOptions,
    ) -> Result<GmmFit<R>, FitError>;

    /// One expectation step: posterior responsibilities [n, k].
    fn e_step(&self, data: &Tensor<R>, params: &GmmParams<R>) -> GmmResult<Tensor<R>>;

    /// One maximization step: re-estimated parameters from responsibilities.
    fn m_step(&self, data: &Tensor<R>, responsibilities: &Tensor<R>) -> GmmResult<GmmParams<R>>;

    /// Multivariate Gaussian log-density of each point in `data` [n, d]
    /// under `mean` [d] and `cov` [d, d]. Returns [n].
    fn gaussian_log_pdf(
        &self,
        data: &Tensor<R>,
        mean: &Tensor<R>,
        cov: &Tensor<R>,
    ) -> GmmResult<Tensor<R>>;

    /// Multivariate Gaussian density, `exp` of [`Self::gaussian_log_pdf`].
    fn gaussian_pdf(
        &self,
        data: &Tensor<R>,
        mean: &Tensor<R>,
        cov: &Tensor<R>,
    ) -> GmmResult<Tensor<R>>;

    /// Total data log-likelihood under the given parameters:
    /// `sum_n log sum_k w_k N(x_n; mu_k, sigma_k)`.
    fn log_likelihood(&self, data: &Tensor<R>, params: &GmmParams<R>) -> GmmResult<f64>;
}
