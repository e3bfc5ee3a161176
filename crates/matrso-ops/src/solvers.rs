//! Linear solvers: exact LU solve, SVD least squares and the pseudoinverse
//!
//! Right-hand sides may carry any number of columns; each column is solved
//! independently.

use crate::catalogue::Operation;
use crate::decompositions::{svd_for, ThinSvd};
use crate::kernels::PartialPivLu;
use matrso_core::validate::{ensure_row_compatible, ensure_solvable};
use matrso_core::{Matrix, MatrixResult, MatrixView};
use scirs2_core::ndarray_ext::Array2;

/// Exact solution of `A · X = B` via partial-pivot LU
///
/// A singular `A` is not rejected: whatever the factorization produces is
/// returned, typically with `inf`/`NaN` entries.
///
/// # Errors
///
/// - [`NotSquare`](matrso_core::MatrixError::NotSquare) when `A` is rectangular
/// - [`RowCountMismatch`](matrso_core::MatrixError::RowCountMismatch) when
///   `A.rows != B.rows`
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::solve;
///
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]);
/// let b = Matrix::column(&[3.0, 5.0]);
/// let x = solve(&a.view(), &b.view()).unwrap();
/// assert!((x[(0, 0)] - 0.8).abs() < 1e-12);
/// assert!((x[(1, 0)] - 1.4).abs() < 1e-12);
/// ```
pub fn solve(a: &MatrixView<'_>, b: &MatrixView<'_>) -> MatrixResult<Matrix> {
    ensure_solvable(Operation::Solve.name(), a, b)?;
    Ok(Matrix::from_array(PartialPivLu::factor(a).solve(b)))
}

/// Minimum-norm least squares solution of `A · X ≈ B`
///
/// Singular values `≤ ε · min(m, n) · σ_max` are treated as zero, so
/// rectangular and rank-deficient systems are handled.
///
/// # Errors
///
/// [`RowCountMismatch`](matrso_core::MatrixError::RowCountMismatch) when
/// `A.rows != B.rows`.
pub fn lstsq(a: &MatrixView<'_>, b: &MatrixView<'_>) -> MatrixResult<Matrix> {
    lstsq_with_tolerance(a, b, None)
}

/// [`lstsq`] with an explicit absolute singular-value cutoff
pub fn lstsq_with_tolerance(
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
    tolerance: Option<f64>,
) -> MatrixResult<Matrix> {
    let op = Operation::Lstsq.name();
    ensure_row_compatible(op, a, b)?;

    let (m, n) = a.dim();
    let svd = svd_for(op, a)?;
    let tolerance =
        tolerance.unwrap_or_else(|| f64::EPSILON * m.min(n) as f64 * svd.max_singular_value());

    // X = V · Σ⁺ · Uᵀ · B
    let mut projected = svd.u.t().dot(b);
    scale_rows(&mut projected, &svd, tolerance);
    Ok(Matrix::from_array(svd.vt.t().dot(&projected)))
}

/// Moore-Penrose pseudoinverse `V · Σ⁺ · Uᵀ`, shape `n × m`
///
/// Singular values `≤ ε · max(m, n) · σ_max` map to zero instead of being
/// reciprocated. Always succeeds for a well-formed matrix.
pub fn pinv(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    pinv_with_tolerance(a, None)
}

/// [`pinv`] with an explicit absolute singular-value cutoff
pub fn pinv_with_tolerance(a: &MatrixView<'_>, tolerance: Option<f64>) -> MatrixResult<Matrix> {
    let (m, n) = a.dim();
    let svd = svd_for(Operation::PseudoInverse.name(), a)?;
    let tolerance =
        tolerance.unwrap_or_else(|| f64::EPSILON * m.max(n) as f64 * svd.max_singular_value());

    let mut scaled_vt = svd.vt.clone();
    scale_rows(&mut scaled_vt, &svd, tolerance);
    Ok(Matrix::from_array(scaled_vt.t().dot(&svd.u.t())))
}

// Row i is multiplied by 1/σᵢ, or zeroed when σᵢ is below the cutoff
fn scale_rows(target: &mut Array2<f64>, svd: &ThinSvd, tolerance: f64) {
    let weights = svd.inverted_values(tolerance);
    for (mut row, &w) in target.rows_mut().into_iter().zip(weights.iter()) {
        row *= w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::mul;
    use matrso_core::MatrixError;

    #[test]
    fn test_solve_consistency() {
        let a = Matrix::from_rows(&[[3.0, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]]);
        let b = Matrix::column(&[1.0, -2.0, 0.0]);
        let x = solve(&a.view(), &b.view()).unwrap();
        assert!(x.approx_eq(&Matrix::column(&[1.0, -2.0, -2.0]), 1e-10));

        let ax = mul(&a.view(), &x.view()).unwrap();
        assert!(ax.approx_eq(&b, 1e-10));
    }

    #[test]
    fn test_solve_dimension_failures() {
        let a = Matrix::eye(3);
        let b = Matrix::zeros(4, 1);
        assert!(matches!(
            solve(&a.view(), &b.view()),
            Err(MatrixError::RowCountMismatch { .. })
        ));
        let rect = Matrix::zeros(3, 2);
        assert!(matches!(
            solve(&rect.view(), &Matrix::zeros(3, 1).view()),
            Err(MatrixError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_solve_singular_still_returns() {
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0]]);
        let b = Matrix::column(&[1.0, 2.0]);
        let x = solve(&a.view(), &b.view()).unwrap();
        assert_eq!(x.shape(), (2, 1));
    }

    #[test]
    fn test_lstsq_overdetermined() {
        // Fit y = 1 + 2t through exact points
        let a = Matrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]);
        let b = Matrix::column(&[1.0, 3.0, 5.0, 7.0]);
        let x = lstsq(&a.view(), &b.view()).unwrap();
        assert!(x.approx_eq(&Matrix::column(&[1.0, 2.0]), 1e-10));
    }

    #[test]
    fn test_lstsq_rank_deficient_minimum_norm() {
        // Duplicated column: minimum-norm solution splits the weight
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0]]);
        let b = Matrix::column(&[2.0, 2.0]);
        let x = lstsq(&a.view(), &b.view()).unwrap();
        assert!(x.approx_eq(&Matrix::column(&[1.0, 1.0]), 1e-10));
    }

    #[test]
    fn test_lstsq_multiple_rhs_and_mismatch() {
        let a = Matrix::eye(2);
        let b = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let x = lstsq(&a.view(), &b.view()).unwrap();
        assert!(x.approx_eq(&b, 1e-12));

        let bad = Matrix::zeros(3, 1);
        assert!(lstsq(&a.view(), &bad.view()).unwrap_err().is_precondition());
    }

    #[test]
    fn test_pinv_of_invertible_is_inverse() {
        let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
        let p = pinv(&a.view()).unwrap();
        let expected = Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]);
        assert!(p.approx_eq(&expected, 1e-10));
    }

    #[test]
    fn test_pinv_rectangular_and_rank_deficient() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]);
        let p = pinv(&a.view()).unwrap();
        assert_eq!(p.shape(), (2, 3));

        // A · A⁺ · A == A
        let apa = mul(&mul(&a.view(), &p.view()).unwrap().view(), &a.view()).unwrap();
        assert!(apa.approx_eq(&a, 1e-10));
    }

    #[test]
    fn test_pinv_zero_matrix() {
        let p = pinv(&Matrix::zeros(2, 3).view()).unwrap();
        assert_eq!(p, Matrix::zeros(3, 2));
    }

    #[test]
    fn test_pinv_tolerance_override() {
        let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1e-3]]);
        let p = pinv_with_tolerance(&a.view(), Some(1e-2)).unwrap();
        assert!(p.approx_eq(&Matrix::from_rows(&[[1.0, 0.0], [0.0, 0.0]]), 1e-12));
    }
}
