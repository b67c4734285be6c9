//! EM convergence driver.

use super::e_step::{e_step_impl, log_joint_impl, logsumexp_rows};
use super::m_step::m_step_impl;
use super::EmClient;
use crate::gmm::error::{FitError, GmmError, GmmResult};
use crate::gmm::traits::gmm::{EmOptions, FitStatus, GmmFit, GmmParams};
use crate::gmm::validation::{
    validate_covariances, validate_data_2d, validate_em_dtype, validate_means, validate_options,
    validate_weights,
};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Total data log-likelihood `Σ_n log Σ_k w_k N(x_n; μ_k, Σ_k)`.
pub fn log_likelihood_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    params: &GmmParams<R>,
) -> GmmResult<f64>
where
    R: Runtime,
    C: EmClient<R>,
{
    let log_joint = log_joint_impl(client, data, params)?;
    let lse = logsumexp_rows(client, &log_joint)?; // [n, 1]
    let total = client.sum(&lse, &[0, 1], false)?;
    Ok(total.item()?)
}

/// Fit a Gaussian mixture by EM from initial parameter guesses.
///
/// Alternates E-step and M-step until the absolute change in total data
/// log-likelihood drops below `options.tol` (→ [`FitStatus::Converged`]) or
/// `options.max_iter` iterations complete (→
/// [`FitStatus::MaxIterationsReached`]).
///
/// The previous-log-likelihood sentinel starts at `+inf` so the first
/// iteration can never trigger convergence. The returned trace holds one
/// value per completed iteration; the value that triggered convergence is
/// not appended. Responsibilities are recomputed under the final parameters
/// before returning.
pub fn em_fit_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    init: &GmmParams<R>,
    options: &EmOptions,
) -> Result<GmmFit<R>, FitError>
where
    R: Runtime,
    C: EmClient<R>,
{
    validate_em_dtype(data.dtype(), "em_fit")?;
    validate_data_2d(data.shape(), "em_fit")?;
    let d = data.shape()[1];
    let k = validate_means(init.means.shape(), d)?;
    validate_covariances(init.covariances.shape(), k, d)?;
    let weight_values: Vec<f64> = init.weights.to_vec();
    validate_weights(init.weights.shape(), &weight_values, k)?;
    validate_options(options)?;

    let mut params = init.clone();
    let mut prev_ll = f64::INFINITY;
    let mut trace: Vec<f64> = Vec::new();
    let mut n_iter = 0;
    let mut status = FitStatus::MaxIterationsReached;

    for _ in 0..options.max_iter {
        let resp = e_step_impl(client, data, &params)
            .map_err(|error| fail(error, n_iter, &trace))?;
        params = m_step_impl(client, data, &resp).map_err(|error| fail(error, n_iter, &trace))?;
        let ll = log_likelihood_impl(client, data, &params)
            .map_err(|error| fail(error, n_iter, &trace))?;

        if (prev_ll - ll).abs() < options.tol {
            status = FitStatus::Converged;
            break;
        }
        trace.push(ll);
        prev_ll = ll;
        n_iter += 1;
    }

    // Responsibilities under the final parameters.
    let responsibilities =
        e_step_impl(client, data, &params).map_err(|error| fail(error, n_iter, &trace))?;

    Ok(GmmFit {
        means: params.means,
        covariances: params.covariances,
        weights: params.weights,
        responsibilities,
        log_likelihood: trace,
        n_iter,
        status,
    })
}

fn fail(error: GmmError, iterations: usize, trace: &[f64]) -> FitError {
    FitError {
        error,
        iterations,
        trace: trace.to_vec(),
    }
}
