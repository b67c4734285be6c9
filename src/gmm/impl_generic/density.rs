//! Multivariate Gaussian density evaluation.

use super::EmClient;
use crate::gmm::error::{GmmError, GmmResult};
use crate::gmm::validation::{validate_data_2d, validate_em_dtype};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Log-density of each point in `data` [n, d] under the Gaussian with
/// `mean` [d] and `cov` [d, d]. Returns [n].
///
/// `log p(x) = -0.5 * d * log(2π) - 0.5 * log det Σ - 0.5 * (x-μ)ᵀ Σ⁻¹ (x-μ)`
pub fn gaussian_log_pdf_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    mean: &Tensor<R>,
    cov: &Tensor<R>,
) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    validate_em_dtype(data.dtype(), "gaussian_log_pdf")?;
    validate_data_2d(data.shape(), "gaussian_log_pdf")?;
    let d = data.shape()[1];

    if mean.shape() != [d] {
        return Err(GmmError::InvalidInput {
            arg: "mean",
            reason: format!("expected [{d}], got {:?}", mean.shape()),
        });
    }
    if cov.shape() != [d, d] {
        return Err(GmmError::InvalidInput {
            arg: "cov",
            reason: format!("expected [{d}, {d}], got {:?}", cov.shape()),
        });
    }

    let mean_row = mean.unsqueeze(0)?; // [1, d]
    log_gaussian_batch(client, data, &mean_row, cov, 0)
}

/// Density, `exp` of the log-density.
pub fn gaussian_pdf_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    mean: &Tensor<R>,
    cov: &Tensor<R>,
) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    let log_pdf = gaussian_log_pdf_impl(client, data, mean, cov)?;
    Ok(client.exp(&log_pdf)?)
}

/// Batched log-density kernel shared with the E-step.
///
/// `mean` is a [1, d] row. Σ⁻¹ and log det Σ are computed once per call,
/// then applied to all n points through tensor ops. `component` tags the
/// singular-covariance error with the offending component index.
pub(crate) fn log_gaussian_batch<R, C>(
    client: &C,
    data: &Tensor<R>,
    mean: &Tensor<R>,
    cov: &Tensor<R>,
    component: usize,
) -> GmmResult<Tensor<R>>
where
    R: Runtime,
    C: EmClient<R>,
{
    let n = data.shape()[0];
    let d = data.shape()[1];
    let dtype = data.dtype();
    let device = data.device();

    // numr reports singular matrices as its own error; fold that into the
    // domain error alongside the explicit determinant-sign check.
    let slogdet = client
        .slogdet(cov)
        .map_err(|_| GmmError::SingularCovariance { component })?;
    let sign: f64 = slogdet.sign.item()?;
    let log_det: f64 = slogdet.logabsdet.item()?;
    if sign <= 0.0 || !log_det.is_finite() {
        return Err(GmmError::SingularCovariance { component });
    }

    let inv_cov = client
        .inverse(cov)
        .map_err(|_| GmmError::SingularCovariance { component })?; // [d, d]
    let diff = client.sub(data, &mean.broadcast_to(&[n, d])?)?; // [n, d]
    let tmp = client.matmul(&diff, &inv_cov)?; // [n, d]
    let maha = client.sum(&client.mul(&tmp, &diff)?, &[1], false)?; // [n]

    let log_2pi = (2.0 * std::f64::consts::PI).ln();
    let val = -0.5 * (d as f64 * log_2pi + log_det);
    let const_term = Tensor::<R>::full_scalar(&[n], dtype, val, device);
    let half = Tensor::<R>::full_scalar(&[n], dtype, -0.5, device);
    let maha_term = client.mul(&half, &maha)?;
    Ok(client.add(&const_term, &maha_term)?)
}
