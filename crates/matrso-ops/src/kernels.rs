//! Factorization kernels backed by faer
//!
//! faer performs the factorizations. This module moves data between
//! `ndarray` storage and `faer::Mat` and reads back what the catalogue needs:
//!
//! - [`PartialPivLu`]: combined `L\U` factor, determinant and exact solves
//! - [`FullPivLu`]: pivot magnitudes for numerical rank and singularity checks
//! - [`real_eigen`]: general (non-symmetric) eigendecomposition, real parts only

use faer::complex_native::c64;
use faer::linalg::solvers::SpSolver;
use faer::Mat;
use matrso_core::MatrixView;
use scirs2_core::ndarray_ext::{Array1, Array2};

pub(crate) fn to_faer(a: &MatrixView<'_>) -> Mat<f64> {
    Mat::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

pub(crate) fn from_faer(m: &Mat<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m.read(i, j))
}

/// Diagonal of `U` from an `(L, U)` pair returned by faer
///
/// faer keeps the pivots on the diagonal of one factor and writes ones on the
/// diagonal of the other, so the non-unit entry is the pivot. A pivot equal
/// to one reads the same from either side.
fn pivots(l: &Mat<f64>, u: &Mat<f64>) -> Vec<f64> {
    let size = l.ncols().min(u.nrows());
    (0..size)
        .map(|i| {
            let from_l = l.read(i, i);
            if from_l != 1.0 {
                from_l
            } else {
                u.read(i, i)
            }
        })
        .collect()
}

/// Partial-pivot LU factorization `P · A = L · U` of a square matrix
pub struct PartialPivLu {
    inner: Option<faer::linalg::solvers::PartialPivLu<f64>>,
    combined: Array2<f64>,
}

impl PartialPivLu {
    /// Factor a square matrix
    ///
    /// Callers validate squareness. The empty matrix is not handed to faer.
    pub fn factor(a: &MatrixView<'_>) -> Self {
        if a.is_empty() {
            return Self {
                inner: None,
                combined: Array2::zeros(a.dim()),
            };
        }

        let lu = to_faer(a).as_ref().partial_piv_lu();
        let l = lu.compute_l();
        let u = lu.compute_u();
        let diag = pivots(&l, &u);
        let combined = Array2::from_shape_fn(a.dim(), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => l.read(i, j),
            std::cmp::Ordering::Equal => diag[i],
            std::cmp::Ordering::Less => u.read(i, j),
        });

        Self {
            inner: Some(lu),
            combined,
        }
    }

    /// Combined factor: unit-lower `L` strictly below the diagonal, `U` on and
    /// above it
    pub fn into_combined(self) -> Array2<f64> {
        self.combined
    }

    /// `sign(P) · ∏ Uᵢᵢ`, exactly `0` once a pivot vanishes
    pub fn determinant(&self) -> f64 {
        let Some(lu) = &self.inner else {
            return 1.0;
        };
        let diag = self.combined.diag();
        // Elimination past a zero pivot fills the trailing block with NaN
        if diag.iter().any(|&p| p == 0.0) {
            return 0.0;
        }
        let sign = if lu.transposition_count() % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        sign * diag.iter().product::<f64>()
    }

    /// Solve `A · X = B` for every column of `B`
    ///
    /// No singularity check is made: a zero pivot shows up as `inf`/`NaN`
    /// entries in `X`.
    pub fn solve(&self, b: &MatrixView<'_>) -> Array2<f64> {
        match &self.inner {
            Some(lu) => from_faer(&lu.solve(to_faer(b).as_ref())),
            None => Array2::zeros((0, b.ncols())),
        }
    }
}

/// Full-pivot LU factorization `P · A · Qᵀ = L · U`
///
/// Only the pivot magnitudes are kept. faer stops eliminating once the
/// remaining corner is numerically zero, so trailing pivots are at most the
/// smallest positive normal value.
#[derive(Debug, Clone)]
pub struct FullPivLu {
    pivots: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FullPivLu {
    /// Factor a matrix of any shape
    pub fn factor(a: &MatrixView<'_>) -> Self {
        let (rows, cols) = a.dim();
        if a.is_empty() {
            return Self {
                pivots: Vec::new(),
                rows,
                cols,
            };
        }

        let lu = to_faer(a).as_ref().full_piv_lu();
        Self {
            pivots: pivots(&lu.compute_l(), &lu.compute_u()),
            rows,
            cols,
        }
    }

    /// Default relative threshold: `ε · min(rows, cols)`
    pub fn default_threshold(&self) -> f64 {
        f64::EPSILON * self.rows.min(self.cols).max(1) as f64
    }

    /// Pivots with `|pivot| > threshold · |max pivot|`
    pub fn rank_with_threshold(&self, threshold: f64) -> usize {
        let max_pivot = self.pivots.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
        let cutoff = threshold * max_pivot;
        self.pivots.iter().filter(|p| p.abs() > cutoff).count()
    }

    /// Rank with the default threshold
    pub fn rank(&self) -> usize {
        self.rank_with_threshold(self.default_threshold())
    }

    /// Square and of full rank under `threshold`
    pub fn is_invertible_with_threshold(&self, threshold: f64) -> bool {
        self.rows == self.cols && self.rank_with_threshold(threshold) == self.rows
    }
}

/// Eigenvalues and eigenvectors of a general square matrix, real parts only
///
/// Values and vectors come from one decomposition, so column `i` of the
/// vector matrix belongs to value `i`.
pub fn real_eigen(a: &MatrixView<'_>) -> (Array1<f64>, Array2<f64>) {
    let n = a.nrows();
    if n == 0 {
        return (Array1::zeros(0), Array2::zeros((0, 0)));
    }

    let evd = to_faer(a).as_ref().eigendecomposition::<c64>();
    let values = evd.s().column_vector();
    let vectors = evd.u();
    (
        Array1::from_shape_fn(n, |i| values.read(i).re),
        Array2::from_shape_fn((n, n), |(i, j)| vectors.read(i, j).re),
    )
}
