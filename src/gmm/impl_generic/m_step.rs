//! Maximization step: weighted parameter re-estimation.

use super::EmClient;
use crate::gmm::error::{GmmError, GmmResult};
use crate::gmm::traits::gmm::GmmParams;
use crate::gmm::validation::{validate_data_2d, validate_em_dtype};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// One maximization step.
///
/// For each component k with effective mass `N_k = Σ_n r[n,k]`:
///
/// - `μ_k = Σ_n r[n,k] x_n / N_k`
/// - `Σ_k = Σ_n r[n,k] (x_n - μ_k)(x_n - μ_k)ᵀ / N_k`
/// - `w_k = N_k / n`
///
/// The covariance is centered on the freshly updated mean, so with a single
/// all-ones responsibility column the output is exactly the sample mean and
/// (biased) sample covariance.
///
/// A component whose mass collapses to zero is reported as
/// `GmmError::EmptyComponent`, never divided through.
pub fn m_step_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    responsibilities: &Tensor<R>,
) -> GmmResult<GmmParams<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    validate_em_dtype(data.dtype(), "m_step")?;
    validate_data_2d(data.shape(), "m_step")?;

    let n = data.shape()[0];
    let d = data.shape()[1];

    let resp_shape = responsibilities.shape();
    if resp_shape.len() != 2 || resp_shape[0] != n || resp_shape[1] == 0 {
        return Err(GmmError::InvalidInput {
            arg: "responsibilities",
            reason: format!("expected [{n}, k], got {resp_shape:?}"),
        });
    }
    let k = resp_shape[1];

    let nk = client.sum(responsibilities, &[0], false)?; // [k]
    let nk_values: Vec<f64> = nk.to_vec();
    for (j, &mass) in nk_values.iter().enumerate() {
        if mass <= 0.0 || !mass.is_finite() {
            return Err(GmmError::EmptyComponent { component: j });
        }
    }

    // means[j] = sum_n resp[n, j] * x_n / nk[j]
    let resp_t = responsibilities.transpose(0, 1)?; // [k, n]
    let weighted_sum = client.matmul(&resp_t, data)?; // [k, d]
    let nk_exp = nk.unsqueeze(1)?.broadcast_to(&[k, d])?;
    let means = client.div(&weighted_sum, &nk_exp)?;

    // cov[j] = (resp[:, j] * (x - mean_j))^T @ (x - mean_j) / nk[j]
    let mut cov_slices = Vec::with_capacity(k);
    for j in 0..k {
        let mean_j = means.narrow(0, j, 1)?; // [1, d]
        let diff = client.sub(data, &mean_j.broadcast_to(&[n, d])?)?; // [n, d]
        let resp_j = responsibilities.narrow(1, j, 1)?; // [n, 1]
        let weighted_diff = client.mul(&diff, &resp_j.broadcast_to(&[n, d])?)?;
        let cov_j = client.matmul(&weighted_diff.transpose(0, 1)?, &diff)?; // [d, d]
        let nk_j = nk.narrow(0, j, 1)?; // [1]
        let cov_j = client.div(&cov_j, &nk_j.broadcast_to(&[d, d])?)?;
        cov_slices.push(cov_j.unsqueeze(0)?);
    }
    let refs: Vec<&Tensor<R>> = cov_slices.iter().collect();
    let covariances = client.cat(&refs, 0)?; // [k, d, d]

    let weights = client.div_scalar(&nk, n as f64)?;

    Ok(GmmParams {
        means,
        covariances,
        weights,
    })
}
