//! Validation helpers for EM inputs.
//!
//! All checks run before the first iteration and fail fast with
//! `GmmError::InvalidInput`.

use crate::gmm::error::{GmmError, GmmResult};
use crate::gmm::traits::gmm::EmOptions;
use numr::dtype::DType;

/// Validate data dtype (must be F32 or F64).
pub fn validate_em_dtype(dtype: DType, op: &'static str) -> GmmResult<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(GmmError::InvalidInput {
            arg: "data",
            reason: format!("{op} requires F32 or F64 data, got {dtype:?}"),
        }),
    }
}

/// Validate that data is 2D [n, d] with at least one point.
pub fn validate_data_2d(shape: &[usize], op: &'static str) -> GmmResult<()> {
    if shape.len() != 2 {
        return Err(GmmError::InvalidInput {
            arg: "data",
            reason: format!("{op} requires 2D data [n, d], got {}-D", shape.len()),
        });
    }
    if shape[0] == 0 {
        return Err(GmmError::InvalidInput {
            arg: "data",
            reason: format!("{op} requires at least 1 data point"),
        });
    }
    if shape[1] == 0 {
        return Err(GmmError::InvalidInput {
            arg: "data",
            reason: format!("{op} requires at least 1 feature dimension"),
        });
    }
    Ok(())
}

/// Validate means shape [k, d] against the data dimensionality. Returns k.
pub fn validate_means(shape: &[usize], d: usize) -> GmmResult<usize> {
    if shape.len() != 2 {
        return Err(GmmError::InvalidInput {
            arg: "means",
            reason: format!("expected 2D means [k, d], got {}-D", shape.len()),
        });
    }
    if shape[0] == 0 {
        return Err(GmmError::InvalidInput {
            arg: "means",
            reason: "need at least 1 component".to_string(),
        });
    }
    if shape[1] != d {
        return Err(GmmError::InvalidInput {
            arg: "means",
            reason: format!("means are {}-dimensional but data is {d}-dimensional", shape[1]),
        });
    }
    Ok(shape[0])
}

/// Validate covariances shape [k, d, d].
pub fn validate_covariances(shape: &[usize], k: usize, d: usize) -> GmmResult<()> {
    if shape != [k, d, d] {
        return Err(GmmError::InvalidInput {
            arg: "covariances",
            reason: format!("expected [{k}, {d}, {d}], got {shape:?}"),
        });
    }
    Ok(())
}

/// Validate mixing weights: shape [k], entries non-negative, sum within
/// 1e-6 of 1.
pub fn validate_weights(shape: &[usize], values: &[f64], k: usize) -> GmmResult<()> {
    if shape != [k] {
        return Err(GmmError::InvalidInput {
            arg: "weights",
            reason: format!("expected [{k}], got {shape:?}"),
        });
    }
    if values.iter().any(|&w| !w.is_finite() || w < 0.0) {
        return Err(GmmError::InvalidInput {
            arg: "weights",
            reason: "weights must be finite and non-negative".to_string(),
        });
    }
    let total: f64 = values.iter().sum();
    if (total - 1.0).abs() > 1e-6 {
        return Err(GmmError::InvalidInput {
            arg: "weights",
            reason: format!("weights must sum to 1, got {total}"),
        });
    }
    Ok(())
}

/// Validate EM options.
pub fn validate_options(options: &EmOptions) -> GmmResult<()> {
    if !options.tol.is_finite() || options.tol <= 0.0 {
        return Err(GmmError::InvalidInput {
            arg: "tol",
            reason: format!("requires finite tol > 0, got {}", options.tol),
        });
    }
    if options.max_iter == 0 {
        return Err(GmmError::InvalidInput {
            arg: "max_iter",
            reason: "requires max_iter > 0".to_string(),
        });
    }
    Ok(())
}
