//! Generic EM kernel implementations, backend-agnostic over numr runtimes.

pub mod density;
pub mod e_step;
pub mod fit;
pub mod m_step;

pub use density::{gaussian_log_pdf_impl, gaussian_pdf_impl};
pub use e_step::{e_step_impl, log_joint_impl};
pub use fit::{em_fit_impl, log_likelihood_impl};
pub use m_step::m_step_impl;

use numr::ops::{
    LinalgOps, MatmulOps, ReduceOps, ScalarOps, ShapeOps, TensorOps, UnaryOps, UtilityOps,
};
use numr::runtime::{Runtime, RuntimeClient};

/// Trait bounds needed by the EM kernels.
pub trait EmClient<R: Runtime>:
    TensorOps<R>
    + ScalarOps<R>
    + UnaryOps<R>
    + ReduceOps<R>
    + MatmulOps<R>
    + LinalgOps<R>
    + ShapeOps<R>
    + UtilityOps<R>
    + RuntimeClient<R>
{
}

impl<R, C> EmClient<R> for C
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + UnaryOps<R>
        + ReduceOps<R>
        + MatmulOps<R>
        + LinalgOps<R>
        + ShapeOps<R>
        + UtilityOps<R>
        + RuntimeClient<R>,
{
}
