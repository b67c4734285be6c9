//! CPU implementation of Gaussian mixture EM.

use crate::gmm::error::{FitError, GmmResult};
use crate::gmm::impl_generic::{
    e_step_impl, em_fit_impl, gaussian_log_pdf_impl, gaussian_pdf_impl, log_likelihood_impl,
    m_step_impl,
};
use crate::gmm::traits::gmm::{EmAlgorithms, EmOptions, GmmFit, GmmParams};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl EmAlgorithms<CpuRuntime> for CpuClient {
    fn em_fit(
        &self,
        data: &Tensor<CpuRuntime>,
        init: &GmmParams<CpuRuntime>,
        options: &EmOptions,
    ) -> Result<GmmFit<CpuRuntime>, FitError> {
        em_fit_impl(self, data, init, options)
    }

    fn e_step(
        &self,
        data: &Tensor<CpuRuntime>,
        params: &GmmParams<CpuRuntime>,
    ) -> GmmResult<Tensor<CpuRuntime>> {
        e_step_impl(self, data, params)
    }

    fn m_step(
        &self,
        data: &Tensor<CpuRuntime>,
        responsibilities: &Tensor<CpuRuntime>,
    ) -> GmmResult<GmmParams<CpuRuntime>> {
        m_step_impl(self, data, responsibilities)
    }

    fn gaussian_log_pdf(
        &self,
        data: &Tensor<CpuRuntime>,
        mean: &Tensor<CpuRuntime>,
        cov: &Tensor<CpuRuntime>,
    ) -> GmmResult<Tensor<CpuRuntime>> {
        gaussian_log_pdf_impl(self, data, mean, cov)
    }

    fn gaussian_pdf(
        &self,
        data: &Tensor<CpuRuntime>,
        mean: &Tensor<CpuRuntime>,
        cov: &Tensor<CpuRuntime>,
    ) -> GmmResult<Tensor<CpuRuntime>> {
        gaussian_pdf_impl(self, data, mean, cov)
    }

    fn log_likelihood(
        &self,
        data: &Tensor<CpuRuntime>,
        params: &GmmParams<CpuRuntime>,
    ) -> GmmResult<f64> {
        log_likelihood_impl(self, data, params)
    }
}
