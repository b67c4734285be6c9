//! gmix - Gaussian Mixture Models fitted by Expectation-Maximization
//!
//! gmix implements one clustering algorithm well: a multivariate Gaussian
//! mixture with full covariances, fitted by the EM algorithm. It is built on
//! numr's tensor primitives, so all heavy math (matmul, inversion, log-det)
//! runs through numr kernels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      gmix                                │
//! │   (density, E-step, M-step, convergence driver)         │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │     (tensors, matmul, inverse, slogdet, reductions)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Algorithms are generic over numr's `Runtime` trait; the crate ships a CPU
//! backend implementation on `CpuClient`.
//!
//! # Example
//!
//! ```ignore
//! use gmix::gmm::{EmAlgorithms, EmOptions, GmmParams};
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let data = Tensor::<CpuRuntime>::from_slice(&[/* n*d values */], &[n, d], &device);
//! let init = GmmParams {
//!     means: Tensor::<CpuRuntime>::from_slice(&[/* k*d */], &[k, d], &device),
//!     covariances: Tensor::<CpuRuntime>::from_slice(&[/* k*d*d */], &[k, d, d], &device),
//!     weights: Tensor::<CpuRuntime>::from_slice(&[/* k */], &[k], &device),
//! };
//!
//! let fit = client.em_fit(&data, &init, &EmOptions::default())?;
//! println!("converged after {} iterations", fit.n_iter);
//! ```
//!
//! # What gmix is not
//!
//! Not a general statistics library. Dataset generation, plotting, and model
//! selection live outside this crate; gmix consumes an `[n, d]` tensor and
//! initial parameter guesses, and returns fitted parameters, responsibilities,
//! and the log-likelihood trace.

pub mod gmm;
