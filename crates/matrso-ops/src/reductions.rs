//! Scalar-valued operations: trace, Frobenius norm, determinant and rank

use crate::catalogue::Operation;
use crate::kernels::{FullPivLu, PartialPivLu};
use matrso_core::validate::ensure_square;
use matrso_core::{MatrixResult, MatrixView};

/// Sum of the diagonal of a square matrix
///
/// # Errors
///
/// [`NotSquare`](matrso_core::MatrixError::NotSquare) for rectangular input.
pub fn trace(a: &MatrixView<'_>) -> MatrixResult<f64> {
    ensure_square(Operation::Trace.name(), a)?;
    Ok(a.diag().sum())
}

/// Frobenius norm `sqrt(Σ aᵢⱼ²)`; any shape, always succeeds
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::norm;
///
/// let a = Matrix::from_rows(&[[3.0, 0.0], [0.0, 4.0]]);
/// assert_eq!(norm(&a.view()), 5.0);
/// ```
pub fn norm(a: &MatrixView<'_>) -> f64 {
    a.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Determinant via partial-pivot LU
///
/// The empty `0 × 0` matrix has determinant `1`.
///
/// # Errors
///
/// [`NotSquare`](matrso_core::MatrixError::NotSquare) for rectangular input.
pub fn determinant(a: &MatrixView<'_>) -> MatrixResult<f64> {
    ensure_square(Operation::Determinant.name(), a)?;
    Ok(PartialPivLu::factor(a).determinant())
}

/// Numerical rank via full-pivot LU with the default threshold `ε · min(m, n)`
pub fn rank(a: &MatrixView<'_>) -> usize {
    FullPivLu::factor(a).rank()
}

/// Numerical rank with an explicit relative pivot threshold
pub fn rank_with_threshold(a: &MatrixView<'_>, threshold: f64) -> usize {
    FullPivLu::factor(a).rank_with_threshold(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrso_core::{Matrix, MatrixError};

    #[test]
    fn test_trace() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(trace(&a.view()).unwrap(), 15.0);
    }

    #[test]
    fn test_trace_not_square() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(
            trace(&a.view()),
            Err(MatrixError::NotSquare {
                rows: 2,
                cols: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_norm_any_shape() {
        let row = Matrix::from_rows(&[[1.0, 2.0, 2.0]]);
        assert_eq!(norm(&row.view()), 3.0);
        assert_eq!(norm(&Matrix::zeros(0, 4).view()), 0.0);
    }

    #[test]
    fn test_determinant() {
        let a = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
        assert!((determinant(&a.view()).unwrap() - 1.0).abs() < 1e-12);

        let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        assert!(determinant(&singular.view()).unwrap().abs() < 1e-12);

        assert_eq!(determinant(&Matrix::zeros(0, 0).view()).unwrap(), 1.0);
        assert!(determinant(&Matrix::zeros(2, 3).view()).is_err());
    }

    #[test]
    fn test_rank() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]);
        assert_eq!(rank(&a.view()), 1);
        assert_eq!(rank(&Matrix::eye(4).view()), 4);
        assert_eq!(rank(&Matrix::zeros(0, 3).view()), 0);
    }

    #[test]
    fn test_rank_with_threshold() {
        let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1e-3]]);
        assert_eq!(rank_with_threshold(&a.view(), 1e-6), 2);
        assert_eq!(rank_with_threshold(&a.view(), 1e-2), 1);
    }
}
