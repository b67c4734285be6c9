//! CPU implementations of mixture-model algorithms.

mod gmm;
