//! Expectation step: joint log-likelihoods and responsibilities.

use super::density::log_gaussian_batch;
use super::EmClient;
use crate::gmm::error::{GmmError, GmmResult};
use crate::gmm::traits::gmm::GmmParams;
use crate::gmm::validation::{validate_data_2d, validate_em_dtype};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Joint log-likelihood `log p(x_n | μ_k, Σ_k) + log w_k` for every
/// (point, component) pair. Returns [n, k].
pub fn log_joint_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    params: &GmmParams<R>,
) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    validate_em_dtype(data.dtype(), "log_joint")?;
    validate_data_2d(data.shape(), "log_joint")?;

    let n = data.shape()[0];
    let d = data.shape()[1];
    let k = params.weights.shape()[0];

    if params.means.shape() != [k, d] {
        return Err(GmmError::InvalidInput {
            arg: "means",
            reason: format!("expected [{k}, {d}], got {:?}", params.means.shape()),
        });
    }
    if params.covariances.shape() != [k, d, d] {
        return Err(GmmError::InvalidInput {
            arg: "covariances",
            reason: format!("expected [{k}, {d}, {d}], got {:?}", params.covariances.shape()),
        });
    }

    // One slogdet + inverse per component, batched over all points.
    let mut columns = Vec::with_capacity(k);
    for j in 0..k {
        let mean_j = params.means.narrow(0, j, 1)?; // [1, d]
        let cov_j = params
            .covariances
            .narrow(0, j, 1)?
            .contiguous()
            .reshape(&[d, d])?;
        let log_gauss = log_gaussian_batch(client, data, &mean_j, &cov_j, j)?; // [n]
        columns.push(log_gauss.unsqueeze(1)?); // [n, 1]
    }
    let refs: Vec<&Tensor<R>> = columns.iter().collect();
    let log_gauss = client.cat(&refs, 1)?; // [n, k]

    let log_weights = client.log(&params.weights)?; // [k]
    let log_weights = log_weights.unsqueeze(0)?.broadcast_to(&[n, k])?;
    Ok(client.add(&log_gauss, &log_weights)?)
}

/// Row-wise log-sum-exp: `max + log Σ exp(x - max)`. [n, k] -> [n, 1].
///
/// The max shift keeps the sum of exponentials in range even when all
/// likelihoods are tiny.
pub(crate) fn logsumexp_rows<R, C>(client: &C, log_prob: &Tensor<R>) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    let max_log = client.max(log_prob, &[1], true)?; // [n, 1]
    let shifted = client.sub(log_prob, &max_log)?;
    let sum_exp = client.sum(&client.exp(&shifted)?, &[1], true)?; // [n, 1]
    Ok(client.add(&client.log(&sum_exp)?, &max_log)?)
}

/// One expectation step: posterior responsibilities [n, k].
///
/// Each row is a distribution over components and sums to 1 up to
/// floating-point tolerance.
pub fn e_step_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    params: &GmmParams<R>,
) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    let n = data.shape()[0];
    let k = params.weights.shape()[0];

    let log_joint = log_joint_impl(client, data, params)?;
    let normalizer = logsumexp_rows(client, &log_joint)?; // [n, 1]
    let shifted = client.sub(&log_joint, &normalizer.broadcast_to(&[n, k])?)?;
    Ok(client.exp(&shifted)?)
}
