//! Factorizations: inverse, LU, QR, Cholesky, SVD and eigendecomposition
//!
//! LU-based operations and the general eigenproblem run on faer through
//! [`crate::kernels`]. QR, Cholesky and SVD are delegated to `scirs2_linalg`;
//! kernel failures are mapped at the call site so the error carries the
//! catalogue name.
//!
//! # SciRS2 Integration
//!
//! All arrays come from `scirs2_core::ndarray_ext`. faer matrices only exist
//! inside [`crate::kernels`].

use crate::catalogue::Operation;
use crate::kernels::{real_eigen, FullPivLu, PartialPivLu};
use matrso_core::validate::ensure_square;
use matrso_core::{Matrix, MatrixError, MatrixResult, MatrixView};
use scirs2_core::ndarray_ext::{s, Array1, Array2, ArrayView2};

/// Inverse of a square matrix
///
/// Computed by solving `A · X = I` with partial-pivot LU. Singularity is
/// decided beforehand by a full-pivot rank estimate with the default threshold.
///
/// # Errors
///
/// - [`NotSquare`](MatrixError::NotSquare) for rectangular input
/// - [`Singular`](MatrixError::Singular) when the rank is below `n` or the
///   solve produced non-finite entries
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::inverse;
///
/// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
/// let inv = inverse(&a.view()).unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
///
/// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
/// assert!(inverse(&singular.view()).is_err());
/// ```
pub fn inverse(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    inverse_with_threshold(a, None)
}

/// [`inverse`] with an explicit relative pivot threshold for the rank test
pub fn inverse_with_threshold(a: &MatrixView<'_>, threshold: Option<f64>) -> MatrixResult<Matrix> {
    let op = Operation::Inverse.name();
    ensure_square(op, a)?;

    let full = FullPivLu::factor(a);
    let threshold = threshold.unwrap_or_else(|| full.default_threshold());
    if !full.is_invertible_with_threshold(threshold) {
        return Err(MatrixError::singular(op));
    }

    let identity = Array2::<f64>::eye(a.nrows());
    let inv = PartialPivLu::factor(a).solve(&identity.view());
    if inv.iter().any(|v| !v.is_finite()) {
        return Err(MatrixError::singular(op));
    }
    Ok(Matrix::from_array(inv))
}

/// Combined `L\U` factor of partial-pivot LU
///
/// Unit-lower `L` sits strictly below the diagonal, `U` on and above it. The
/// row permutation is not returned.
///
/// # Errors
///
/// [`NotSquare`](MatrixError::NotSquare) for rectangular input.
pub fn lu(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    ensure_square(Operation::Lu.name(), a)?;
    Ok(Matrix::from_array(PartialPivLu::factor(a).into_combined()))
}

/// Upper-trapezoidal `R` factor of `A = Q · R`, shape `m × n`
///
/// Tall and square inputs go straight to the kernel. For a wide input the
/// leading `m × m` block is factored and the trailing columns are carried
/// through `Qᵀ`, the same block split used for wide TT cores.
pub fn qr(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    let op = Operation::Qr.name();
    let (m, n) = a.dim();
    if m == 0 || n == 0 {
        return Ok(Matrix::zeros(m, n));
    }

    if m >= n {
        let (_q, r) = scirs2_linalg::qr(a, None).map_err(|e| MatrixError::kernel(op, e))?;
        return Ok(Matrix::from_array(upper_trapezoid(&r.view(), m, n)));
    }

    let left = a.slice(s![.., ..m]);
    let right = a.slice(s![.., m..]);
    let (q, r_left) = scirs2_linalg::qr(&left, None).map_err(|e| MatrixError::kernel(op, e))?;
    if q.dim() != (m, m) {
        return Err(MatrixError::kernel(
            op,
            format!("expected a {m}x{m} Q factor, got {:?}", q.dim()),
        ));
    }

    let mut r = Array2::<f64>::zeros((m, n));
    r.slice_mut(s![.., ..m])
        .assign(&upper_trapezoid(&r_left.view(), m, m));
    r.slice_mut(s![.., m..]).assign(&q.t().dot(&right));
    Ok(Matrix::from_array(r))
}

fn upper_trapezoid(source: &ArrayView2<'_, f64>, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        if j >= i && i < source.nrows() && j < source.ncols() {
            source[[i, j]]
        } else {
            0.0
        }
    })
}

/// Lower Cholesky factor `L` with `A = L · Lᵀ`
///
/// # Errors
///
/// - [`NotSquare`](MatrixError::NotSquare) for rectangular input
/// - [`NotPositiveDefinite`](MatrixError::NotPositiveDefinite) whenever the
///   factorization does not succeed
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
/// use matrso_ops::cholesky;
///
/// let a = Matrix::from_rows(&[[4.0, 2.0], [2.0, 3.0]]);
/// let l = cholesky(&a.view()).unwrap();
/// assert!((l[(0, 0)] - 2.0).abs() < 1e-12);
/// assert_eq!(l[(0, 1)], 0.0);
/// ```
pub fn cholesky(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    let op = Operation::Cholesky.name();
    ensure_square(op, a)?;
    let n = a.nrows();
    if n == 0 {
        return Ok(Matrix::zeros(0, 0));
    }

    let l = scirs2_linalg::cholesky(a, None).map_err(|_| MatrixError::not_positive_definite(op))?;
    if l.dim() != (n, n)
        || l.iter().any(|v| !v.is_finite())
        || (0..n).any(|i| l[[i, i]] <= 0.0)
    {
        return Err(MatrixError::not_positive_definite(op));
    }

    Ok(Matrix::from_array(Array2::from_shape_fn((n, n), |(i, j)| {
        if j <= i {
            l[[i, j]]
        } else {
            0.0
        }
    })))
}

/// Thin singular value decomposition `A = U · diag(s) · Vᵀ`
///
/// With `k = min(m, n)`: `u` is `m × k`, `s` has `k` entries in descending
/// order and `vt` is `k × n`.
#[derive(Debug, Clone)]
pub struct ThinSvd {
    pub u: Array2<f64>,
    pub s: Array1<f64>,
    pub vt: Array2<f64>,
}

impl ThinSvd {
    /// Largest singular value, `0` for empty input
    pub fn max_singular_value(&self) -> f64 {
        self.s.iter().copied().fold(0.0, f64::max)
    }

    /// Reciprocals of the singular values above `tolerance`, zero elsewhere
    pub fn inverted_values(&self, tolerance: f64) -> Array1<f64> {
        self.s
            .mapv(|sigma| if sigma > tolerance { 1.0 / sigma } else { 0.0 })
    }
}

/// Thin SVD of any matrix
pub fn thin_svd(a: &MatrixView<'_>) -> MatrixResult<ThinSvd> {
    svd_for(Operation::Svd.name(), a)
}

pub(crate) fn svd_for(operation: &'static str, a: &MatrixView<'_>) -> MatrixResult<ThinSvd> {
    let (m, n) = a.dim();
    let k = m.min(n);
    if k == 0 {
        return Ok(ThinSvd {
            u: Array2::zeros((m, 0)),
            s: Array1::zeros(0),
            vt: Array2::zeros((0, n)),
        });
    }

    let (u, sigma, vt) =
        scirs2_linalg::svd(a, false, None).map_err(|e| MatrixError::kernel(operation, e))?;
    if u.nrows() != m || u.ncols() < k || sigma.len() < k || vt.nrows() < k || vt.ncols() != n {
        return Err(MatrixError::kernel(
            operation,
            format!(
                "unexpected factor shapes: U {:?}, s {}, Vt {:?}",
                u.dim(),
                sigma.len(),
                vt.dim()
            ),
        ));
    }

    Ok(ThinSvd {
        u: u.slice(s![.., ..k]).to_owned(),
        s: sigma.slice(s![..k]).to_owned(),
        vt: vt.slice(s![..k, ..]).to_owned(),
    })
}

/// Singular values in descending order, `min(m, n)` of them
pub fn svd_values(a: &MatrixView<'_>) -> MatrixResult<Array1<f64>> {
    Ok(svd_for(Operation::Svd.name(), a)?.s)
}

/// `U`, `diag(s)` and `Vᵀ` stacked vertically
///
/// The result is `(m + 2k) × max(m, n)` with `k = min(m, n)`: rows `[0, m)`
/// hold `U`, rows `[m, m + k)` the `k × k` diagonal block and rows
/// `[m + k, m + 2k)` hold `Vᵀ`. Every block is left-aligned and the rest is
/// zero.
pub fn svd_full(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    let (m, n) = a.dim();
    let k = m.min(n);
    let svd = svd_for(Operation::SvdFull.name(), a)?;

    let mut stacked = Array2::<f64>::zeros((m + 2 * k, m.max(n)));
    stacked.slice_mut(s![..m, ..k]).assign(&svd.u);
    for (i, &sigma) in svd.s.iter().enumerate() {
        stacked[[m + i, i]] = sigma;
    }
    stacked.slice_mut(s![m + k.., ..n]).assign(&svd.vt);
    Ok(Matrix::from_array(stacked))
}

/// Real parts of a general eigendecomposition
///
/// Column `i` of `vectors` pairs with `values[i]`. Imaginary parts are dropped.
#[derive(Debug, Clone)]
pub struct RealEigen {
    pub values: Array1<f64>,
    pub vectors: Array2<f64>,
}

/// Eigenvalues and eigenvectors of a square matrix, real parts only
pub fn eigen(a: &MatrixView<'_>) -> MatrixResult<RealEigen> {
    eigen_for(Operation::Eigenvectors.name(), a)
}

fn eigen_for(operation: &'static str, a: &MatrixView<'_>) -> MatrixResult<RealEigen> {
    ensure_square(operation, a)?;
    let (values, vectors) = real_eigen(a);
    if values.iter().chain(vectors.iter()).any(|v| !v.is_finite()) {
        return Err(MatrixError::kernel(operation, "eigendecomposition did not converge"));
    }
    Ok(RealEigen { values, vectors })
}

/// Real parts of the eigenvalues
pub fn eigenvalues(a: &MatrixView<'_>) -> MatrixResult<Array1<f64>> {
    Ok(eigen_for(Operation::Eigenvalues.name(), a)?.values)
}

/// Real parts of the eigenvectors, one per column
pub fn eigenvectors(a: &MatrixView<'_>) -> MatrixResult<Matrix> {
    Ok(Matrix::from_array(
        eigen_for(Operation::Eigenvectors.name(), a)?.vectors,
    ))
}
