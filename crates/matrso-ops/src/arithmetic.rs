//! Elementwise arithmetic, matrix product and transpose
//!
//! # SciRS2 Integration
//!
//! Products go through `ArrayBase::dot` from `scirs2_core::ndarray_ext`.

use crate::catalogue::Operation;
use matrso_core::validate::{ensure_mul_conformable, ensure_same_shape};
use matrso_core::{Matrix, MatrixResult, MatrixView};

/// Elementwise sum `C[i, j] = A[i, j] + B[i, j]`
///
/// # Errors
///
/// [`ShapeMismatch`](matrso_core::MatrixError::ShapeMismatch) when the shapes differ.
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::add;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows(&[[10.0, 20.0], [30.0, 40.0]]);
/// let c = add(&a.view(), &b.view()).unwrap();
/// assert_eq!(c[(1, 1)], 44.0);
/// ```
pub fn add(a: &MatrixView<'_>, b: &MatrixView<'_>) -> MatrixResult<Matrix> {
    ensure_same_shape(Operation::Add.name(), a, b)?;
    Ok(Matrix::from_array(a + b))
}

/// Elementwise difference `C[i, j] = A[i, j] - B[i, j]`
///
/// # Errors
///
/// [`ShapeMismatch`](matrso_core::MatrixError::ShapeMismatch) when the shapes differ.
pub fn sub(a: &MatrixView<'_>, b: &MatrixView<'_>) -> MatrixResult<Matrix> {
    ensure_same_shape(Operation::Sub.name(), a, b)?;
    Ok(Matrix::from_array(a - b))
}

/// Matrix product `A · B`
///
/// # Errors
///
/// [`InnerDimensionMismatch`](matrso_core::MatrixError::InnerDimensionMismatch)
/// when `A.cols != B.rows`.
///
/// # Complexity
///
/// O(m · n · p) for `(m × n) · (n × p)`
pub fn mul(a: &MatrixView<'_>, b: &MatrixView<'_>) -> MatrixResult<Matrix> {
    ensure_mul_conformable(Operation::Mul.name(), a, b)?;
    Ok(Matrix::from_array(a.dot(b)))
}

/// Transpose; always succeeds
///
/// The result is materialised in row-major order rather than returned as a
/// strided view.
pub fn transpose(a: &MatrixView<'_>) -> Matrix {
    Matrix::from_array(a.t().as_standard_layout().into_owned())
}
