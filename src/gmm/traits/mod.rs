//! Mixture-model types and algorithm traits.

pub mod gmm;
