//! Dimension validation shared by every catalogue operation
//!
//! The `is_*` predicates are pure shape tests. The `ensure_*` helpers wrap them
//! into [`MatrixResult`]s carrying the operation name, so operations can bail out
//! with `?` before any numerical work.

use crate::error::{MatrixError, MatrixResult};
use crate::types::MatrixView;

/// Largest dimension a generator may produce
pub const MAX_DIMENSION: usize = 10_000;

/// Same `(rows, cols)`
pub fn is_same_shape(a: &MatrixView<'_>, b: &MatrixView<'_>) -> bool {
    a.dim() == b.dim()
}

/// `a.cols == b.rows`
pub fn is_mul_conformable(a: &MatrixView<'_>, b: &MatrixView<'_>) -> bool {
    a.ncols() == b.nrows()
}

/// `rows == cols`
pub fn is_square(a: &MatrixView<'_>) -> bool {
    a.nrows() == a.ncols()
}

/// Square `a` whose row count matches `b`
pub fn is_solvable(a: &MatrixView<'_>, b: &MatrixView<'_>) -> bool {
    is_square(a) && a.nrows() == b.nrows()
}

/// `a.rows == b.rows`
pub fn is_row_compatible(a: &MatrixView<'_>, b: &MatrixView<'_>) -> bool {
    a.nrows() == b.nrows()
}

/// `0 < dim <= max`
pub fn is_valid_dimension(dim: usize, max: usize) -> bool {
    dim > 0 && dim <= max
}

/// Require identical shapes (elementwise operations)
pub fn ensure_same_shape(
    operation: &'static str,
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
) -> MatrixResult<()> {
    if is_same_shape(a, b) {
        Ok(())
    } else {
        Err(MatrixError::shape_mismatch(operation, a.dim(), b.dim()))
    }
}

/// Require `a.cols == b.rows` (matrix product)
pub fn ensure_mul_conformable(
    operation: &'static str,
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
) -> MatrixResult<()> {
    if is_mul_conformable(a, b) {
        Ok(())
    } else {
        Err(MatrixError::inner_dimension_mismatch(
            operation,
            a.ncols(),
            b.nrows(),
        ))
    }
}

/// Require a square matrix
pub fn ensure_square(operation: &'static str, a: &MatrixView<'_>) -> MatrixResult<()> {
    if is_square(a) {
        Ok(())
    } else {
        Err(MatrixError::not_square(operation, a.nrows(), a.ncols()))
    }
}

/// Require matching row counts (least squares right-hand side)
pub fn ensure_row_compatible(
    operation: &'static str,
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
) -> MatrixResult<()> {
    if is_row_compatible(a, b) {
        Ok(())
    } else {
        Err(MatrixError::row_count_mismatch(
            operation,
            a.nrows(),
            b.nrows(),
        ))
    }
}

/// Require a square `a` with as many rows as `b` (exact solve)
pub fn ensure_solvable(
    operation: &'static str,
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
) -> MatrixResult<()> {
    ensure_square(operation, a)?;
    ensure_row_compatible(operation, a, b)
}

/// Require `0 < dim <= max`
pub fn ensure_dimension(operation: &'static str, dim: usize, max: usize) -> MatrixResult<usize> {
    if is_valid_dimension(dim, max) {
        Ok(dim)
    } else {
        Err(MatrixError::dimension_out_of_range(operation, dim as f64, max))
    }
}

/// Turn a caller-supplied scalar into a bounded dimension
///
/// The value is truncated toward zero. NaN, infinities and anything whose
/// truncation falls outside `(0, max]` are rejected; the range check happens on
/// the float so huge values never reach an integer cast.
///
/// ```
/// use matrso_core::validate::dimension_from_scalar;
///
/// assert_eq!(dimension_from_scalar("MATRIX.IDENTITY", 3.9, 10_000).unwrap(), 3);
/// assert!(dimension_from_scalar("MATRIX.IDENTITY", 0.5, 10_000).is_err());
/// assert!(dimension_from_scalar("MATRIX.IDENTITY", f64::NAN, 10_000).is_err());
/// ```
pub fn dimension_from_scalar(operation: &'static str, value: f64, max: usize) -> MatrixResult<usize> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 1.0 || truncated > max as f64 {
        return Err(MatrixError::dimension_out_of_range(operation, value, max));
    }
    Ok(truncated as usize)
}
