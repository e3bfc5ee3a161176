//! Conversion between the external flat row-major format and internal matrices
//!
//! Inputs arrive as [`ExternalView`]s (caller-owned buffers tagged with their
//! shape) and are reinterpreted in place as [`MatrixView`]s; no copy is made
//! because the internal storage is row-major too.
//!
//! Results leave through a single reusable [`OutputSlot`]. Writing a result
//! resizes the slot's buffer to the new shape (reusing its allocation) and
//! copies every entry back in row-major order. A previously returned
//! [`ExternalArray`] is only readable until the slot is written again.

use crate::error::{MatrixError, MatrixResult};
use crate::types::{Matrix, MatrixView};
use scirs2_core::ndarray_ext::ArrayView1;

/// Caller-owned flat buffer plus its `(rows, cols)` tag
#[derive(Debug, Clone, Copy)]
pub struct ExternalView<'a> {
    rows: usize,
    cols: usize,
    data: &'a [f64],
}

impl<'a> ExternalView<'a> {
    /// Tag a row-major buffer with its shape
    ///
    /// Fails when `data.len() != rows * cols`.
    ///
    /// ```
    /// use matrso_core::ExternalView;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// assert!(ExternalView::new(2, 2, &data).is_ok());
    /// assert!(ExternalView::new(3, 2, &data).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: &'a [f64]) -> MatrixResult<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::buffer_length(rows, cols, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The row-major buffer
    pub fn data(&self) -> &'a [f64] {
        self.data
    }
}

/// Library-owned flat row-major result buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalArray {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ExternalArray {
    /// Empty `0 × 0` buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major entries; always `rows * cols` long
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Entry at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Borrow as an input view, e.g. to feed a result into the next call
    pub fn as_view(&self) -> ExternalView<'_> {
        ExternalView {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }

    /// Reinterpret as an internal matrix view
    pub fn view(&self) -> MatrixResult<MatrixView<'_>> {
        to_internal(&self.as_view())
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, 0.0);
    }
}

/// Orientation forced on 1-D results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorShape {
    /// `(size, 1)`
    Column,
    /// `(1, size)`
    Row,
}

/// Interpret an external buffer as an internal matrix without copying
///
/// Guarantees `internal[(i, j)] == external.data()[i * cols + j]`.
///
/// ```
/// use matrso_core::{to_internal, ExternalView};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let ext = ExternalView::new(2, 3, &data).unwrap();
/// let m = to_internal(&ext).unwrap();
/// assert_eq!(m[[1, 2]], 6.0);
/// ```
pub fn to_internal<'a>(external: &ExternalView<'a>) -> MatrixResult<MatrixView<'a>> {
    MatrixView::from_shape((external.rows, external.cols), external.data)
        .map_err(|_| MatrixError::buffer_length(external.rows, external.cols, external.data.len()))
}

/// The single reusable output buffer
///
/// Every write invalidates the previously returned reference; the borrow
/// checker enforces this because writes take `&mut self`.
#[derive(Debug, Default)]
pub struct OutputSlot {
    buffer: ExternalArray,
}

impl OutputSlot {
    /// Empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a matrix into the slot in row-major order
    ///
    /// ```
    /// use matrso_core::{Matrix, OutputSlot};
    ///
    /// let mut slot = OutputSlot::new();
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let out = slot.write_matrix(&m.view());
    /// assert_eq!(out.data(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn write_matrix(&mut self, matrix: &MatrixView<'_>) -> &ExternalArray {
        let (rows, cols) = matrix.dim();
        self.buffer.resize(rows, cols);
        for (dst, src) in self.buffer.data.iter_mut().zip(matrix.iter()) {
            *dst = *src;
        }
        &self.buffer
    }

    /// Copy a 1-D result into the slot with a forced orientation
    pub fn write_vector(&mut self, vector: &ArrayView1<'_, f64>, shape: VectorShape) -> &ExternalArray {
        let size = vector.len();
        match shape {
            VectorShape::Column => self.buffer.resize(size, 1),
            VectorShape::Row => self.buffer.resize(1, size),
        }
        for (dst, src) in self.buffer.data.iter_mut().zip(vector.iter()) {
            *dst = *src;
        }
        &self.buffer
    }

    /// The most recently written result
    pub fn current(&self) -> &ExternalArray {
        &self.buffer
    }

    /// Capacity of the reused allocation, in entries
    pub fn capacity(&self) -> usize {
        self.buffer.data.capacity()
    }
}

/// Convert an owned matrix into the slot (`from_internal`)
pub fn from_internal<'s>(slot: &'s mut OutputSlot, matrix: &Matrix) -> &'s ExternalArray {
    slot.write_matrix(&matrix.view())
}

/// Convert a 1-D result into the slot (`vector_to_external`)
pub fn vector_to_external<'s>(
    slot: &'s mut OutputSlot,
    vector: &ArrayView1<'_, f64>,
    shape: VectorShape,
) -> &'s ExternalArray {
    slot.write_vector(vector, shape)
}
