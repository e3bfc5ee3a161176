//! Matrix generators and the diagonal builder/extractor
//!
//! Generator dimensions are bounded by [`MAX_DIMENSION`] (or a tighter limit
//! passed by the caller) so a caller-supplied size cannot request unbounded
//! memory.

use crate::catalogue::Operation;
use matrso_core::validate::{ensure_dimension, MAX_DIMENSION};
use matrso_core::{Matrix, MatrixResult, MatrixView};
use scirs2_core::ndarray_ext::Array2;

/// `n × n` identity
///
/// # Errors
///
/// [`DimensionOutOfRange`](matrso_core::MatrixError::DimensionOutOfRange) when
/// `n` is outside `(0, MAX_DIMENSION]`.
pub fn identity(n: usize) -> MatrixResult<Matrix> {
    identity_with_limit(n, MAX_DIMENSION)
}

/// [`identity`] with a caller-chosen upper bound
pub fn identity_with_limit(n: usize, max: usize) -> MatrixResult<Matrix> {
    let n = ensure_dimension(Operation::Identity.name(), n, max.min(MAX_DIMENSION))?;
    Ok(Matrix::eye(n))
}

/// All-zero `rows × cols` matrix
///
/// # Errors
///
/// [`DimensionOutOfRange`](matrso_core::MatrixError::DimensionOutOfRange) when
/// either dimension is outside `(0, MAX_DIMENSION]`.
pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Matrix> {
    zeros_with_limit(rows, cols, MAX_DIMENSION)
}

/// [`zeros`] with a caller-chosen upper bound
pub fn zeros_with_limit(rows: usize, cols: usize, max: usize) -> MatrixResult<Matrix> {
    let op = Operation::Zeros.name();
    let max = max.min(MAX_DIMENSION);
    let rows = ensure_dimension(op, rows, max)?;
    let cols = ensure_dimension(op, cols, max)?;
    Ok(Matrix::zeros(rows, cols))
}

/// Build or extract a diagonal
///
/// A single-column input (including `1 × 1`) always builds the `n × n`
/// diagonal matrix. Anything else yields its leading `min(m, n)` diagonal
/// entries as a column vector.
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::diag;
///
/// let built = diag(&Matrix::column(&[1.0, 2.0, 3.0]).view());
/// assert_eq!(built.shape(), (3, 3));
/// assert_eq!(built[(2, 2)], 3.0);
///
/// let extracted = diag(&Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).view());
/// assert_eq!(extracted.to_row_major(), vec![1.0, 4.0]);
/// ```
pub fn diag(a: &MatrixView<'_>) -> Matrix {
    if a.ncols() == 1 {
        let n = a.nrows();
        let mut out = Array2::<f64>::zeros((n, n));
        out.diag_mut().assign(&a.column(0));
        Matrix::from_array(out)
    } else {
        let d = a.diag();
        Matrix::from_array(Array2::from_shape_fn((d.len(), 1), |(i, _)| d[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrso_core::MatrixError;

    #[test]
    fn test_identity() {
        let i3 = identity(3).unwrap();
        assert_eq!(i3.shape(), (3, 3));
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(i3[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_generator_bounds() {
        assert!(matches!(
            identity(0),
            Err(MatrixError::DimensionOutOfRange { .. })
        ));
        assert!(identity(10_001).is_err());
        assert!(identity(10_000).is_ok());
        assert!(zeros(0, 5).is_err());
        assert!(zeros(5, 10_001).is_err());
        assert_eq!(zeros(2, 4).unwrap(), Matrix::zeros(2, 4));
    }

    #[test]
    fn test_generator_limit_only_tightens() {
        assert!(identity_with_limit(20, 10).is_err());
        assert!(zeros_with_limit(10_001, 1, usize::MAX).is_err());
    }

    #[test]
    fn test_diag_single_column_builds() {
        let one = Matrix::from_rows(&[[7.0]]);
        assert_eq!(diag(&one.view()), one);

        let built = diag(&Matrix::column(&[1.0, -2.0]).view());
        assert_eq!(built, Matrix::from_rows(&[[1.0, 0.0], [0.0, -2.0]]));
    }

    #[test]
    fn test_diag_extracts() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(diag(&a.view()).to_row_major(), vec![1.0, 5.0, 9.0]);

        let wide = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let d = diag(&wide.view());
        assert_eq!(d.shape(), (2, 1));
        assert_eq!(d.to_row_major(), vec![1.0, 5.0]);

        // A single row has more than one column, so it extracts
        let row = Matrix::from_rows(&[[4.0, 5.0]]);
        assert_eq!(diag(&row.view()).to_row_major(), vec![4.0]);
    }
}
