//! Dense matrix type definition and basic accessors
//!
//! [`Matrix`] wraps a row-major `Array2<f64>` from scirs2_core. Catalogue
//! operations read their inputs through [`MatrixView`] (a borrowed
//! `ArrayView2<f64>`) and return owned `Matrix` values.

use crate::error::{MatrixError, MatrixResult};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};

/// Borrowed, zero-copy view of a dense matrix
pub type MatrixView<'a> = ArrayView2<'a, f64>;

/// Dense `rows × cols` matrix of `f64` values
///
/// Storage is C-contiguous (row-major) so the external flat layout maps onto it
/// without a transpose.
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
///
/// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 0)], 4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) data: Array2<f64>,
}

impl Matrix {
    /// Wrap an existing array
    pub fn from_array(array: Array2<f64>) -> Self {
        Self { data: array }
    }

    /// Build a matrix from row-major values
    ///
    /// Fails with [`MatrixError::BufferLength`] when `values.len() != rows * cols`.
    pub fn from_vec(values: Vec<f64>, rows: usize, cols: usize) -> MatrixResult<Self> {
        let actual = values.len();
        if rows.checked_mul(cols) != Some(actual) {
            return Err(MatrixError::buffer_length(rows, cols, actual));
        }
        Array2::from_shape_vec((rows, cols), values)
            .map(Self::from_array)
            .map_err(|_| MatrixError::buffer_length(rows, cols, actual))
    }

    /// Build a matrix from a list of equally long rows
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        Self::from_array(Array2::from_shape_fn((rows.len(), N), |(i, j)| rows[i][j]))
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_array(Array2::zeros((rows, cols)))
    }

    /// `n × n` identity
    pub fn eye(n: usize) -> Self {
        Self::from_array(Array2::eye(n))
    }

    /// `n × 1` column vector
    pub fn column(values: &[f64]) -> Self {
        Self::from_array(Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i]))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `true` when `rows == cols`
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Entry at `(row, col)`, or `None` out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Zero-copy view for passing to catalogue operations
    pub fn view(&self) -> MatrixView<'_> {
        self.data.view()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Unwrap into the underlying array
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Row-major copy of all entries
    pub fn to_row_major(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Largest absolute entrywise difference, or `None` when shapes differ
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0]]);
    /// let b = Matrix::from_rows(&[[1.0, 2.5]]);
    /// assert_eq!(a.max_abs_diff(&b), Some(0.5));
    /// ```
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    /// `true` when shapes agree and every entry is within `tol`
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.max_abs_diff(other).is_some_and(|d| d <= tol)
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(array: Array2<f64>) -> Self {
        Self::from_array(array)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index]
    }
}
