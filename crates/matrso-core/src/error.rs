//! Error types for matrix operations
//!
//! Every catalogue operation reports failure through [`MatrixError`]. The
//! variants split into two classes:
//!
//! - **Precondition failures** (shape and dimension checks) detected before any
//!   numerical work is attempted.
//! - **Numerical failures** reported by a factorization after it ran, plus
//!   contained internal faults.
//!
//! The boundary layer erases the reason when a result crosses to the caller; the
//! variants stay available to code that calls the catalogue directly.

use thiserror::Error;

/// Error type for matrix operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Elementwise operands differ in shape
    #[error("{operation}: shape mismatch - {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    ShapeMismatch {
        operation: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// `A.cols != B.rows` for a product
    #[error("{operation}: inner dimensions differ - left has {lhs_cols} columns, right has {rhs_rows} rows")]
    InnerDimensionMismatch {
        operation: &'static str,
        lhs_cols: usize,
        rhs_rows: usize,
    },

    /// Square-only operation applied to a rectangular matrix
    #[error("{operation}: requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Right-hand side row count does not match the coefficient matrix
    #[error("{operation}: right-hand side has {actual} rows, expected {expected}")]
    RowCountMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Generator dimension outside `(0, max]`
    #[error("{operation}: dimension {value} outside (0, {max}]")]
    DimensionOutOfRange {
        operation: &'static str,
        value: f64,
        max: usize,
    },

    /// Flat buffer length disagrees with its `(rows, cols)` tag
    #[error("buffer holds {actual} values but a {rows}x{cols} matrix requires {expected}")]
    BufferLength {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// Matrix is singular to working precision
    #[error("{operation}: matrix is singular")]
    Singular { operation: &'static str },

    /// Cholesky factorization reported non-success
    #[error("{operation}: matrix is not positive definite")]
    NotPositiveDefinite { operation: &'static str },

    /// The kernel library reported a failure
    #[error("{operation}: kernel failure: {message}")]
    Kernel {
        operation: &'static str,
        message: String,
    },

    /// A panic raised inside an operation, caught at the boundary
    #[error("{operation}: internal fault: {message}")]
    InternalFault {
        operation: &'static str,
        message: String,
    },
}

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        MatrixError::ShapeMismatch {
            operation,
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }

    /// Create an inner dimension mismatch error
    pub fn inner_dimension_mismatch(operation: &'static str, lhs_cols: usize, rhs_rows: usize) -> Self {
        MatrixError::InnerDimensionMismatch {
            operation,
            lhs_cols,
            rhs_rows,
        }
    }

    /// Create a not-square error
    pub fn not_square(operation: &'static str, rows: usize, cols: usize) -> Self {
        MatrixError::NotSquare {
            operation,
            rows,
            cols,
        }
    }

    /// Create a row count mismatch error
    pub fn row_count_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        MatrixError::RowCountMismatch {
            operation,
            expected,
            actual,
        }
    }

    /// Create a dimension-out-of-range error
    pub fn dimension_out_of_range(operation: &'static str, value: f64, max: usize) -> Self {
        MatrixError::DimensionOutOfRange {
            operation,
            value,
            max,
        }
    }

    /// Create a buffer length error
    pub fn buffer_length(rows: usize, cols: usize, actual: usize) -> Self {
        MatrixError::BufferLength {
            rows,
            cols,
            expected: rows.saturating_mul(cols),
            actual,
        }
    }

    /// Create a singular matrix error
    pub fn singular(operation: &'static str) -> Self {
        MatrixError::Singular { operation }
    }

    /// Create a not-positive-definite error
    pub fn not_positive_definite(operation: &'static str) -> Self {
        MatrixError::NotPositiveDefinite { operation }
    }

    /// Wrap a kernel library failure
    pub fn kernel(operation: &'static str, source: impl std::fmt::Display) -> Self {
        MatrixError::Kernel {
            operation,
            message: source.to_string(),
        }
    }

    /// Create an internal fault error
    pub fn internal_fault(operation: &'static str, message: impl Into<String>) -> Self {
        MatrixError::InternalFault {
            operation,
            message: message.into(),
        }
    }

    /// `true` for failures detected before any numerical work
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            MatrixError::ShapeMismatch { .. }
                | MatrixError::InnerDimensionMismatch { .. }
                | MatrixError::NotSquare { .. }
                | MatrixError::RowCountMismatch { .. }
                | MatrixError::DimensionOutOfRange { .. }
                | MatrixError::BufferLength { .. }
        )
    }

    /// `true` for failures reported after a kernel ran (including contained faults)
    pub fn is_numerical(&self) -> bool {
        !self.is_precondition()
    }

    /// Catalogue name of the operation that failed, if known
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            MatrixError::ShapeMismatch { operation, .. }
            | MatrixError::InnerDimensionMismatch { operation, .. }
            | MatrixError::NotSquare { operation, .. }
            | MatrixError::RowCountMismatch { operation, .. }
            | MatrixError::DimensionOutOfRange { operation, .. }
            | MatrixError::Singular { operation }
            | MatrixError::NotPositiveDefinite { operation }
            | MatrixError::Kernel { operation, .. }
            | MatrixError::InternalFault { operation, .. } => Some(*operation),
            MatrixError::BufferLength { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = MatrixError::shape_mismatch("MATRIX.ADD", (2, 3), (3, 2));

        let msg = format!("{}", err);
        assert!(msg.contains("MATRIX.ADD"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("3x2"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrixError::not_square("MATRIX.TRACE", 2, 5);

        let msg = format!("{}", err);
        assert!(msg.contains("square"));
        assert!(msg.contains("2x5"));
    }

    #[test]
    fn test_buffer_length_expected() {
        let err = MatrixError::buffer_length(3, 4, 11);
        match err {
            MatrixError::BufferLength {
                expected, actual, ..
            } => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn test_error_classes() {
        assert!(MatrixError::inner_dimension_mismatch("MATRIX.MUL", 3, 2).is_precondition());
        assert!(MatrixError::dimension_out_of_range("MATRIX.IDENTITY", 0.0, 10_000).is_precondition());
        assert!(MatrixError::not_positive_definite("MATRIX.CHOLESKY").is_numerical());
        assert!(MatrixError::singular("MATRIX.INVERSE").is_numerical());
        assert!(MatrixError::internal_fault("MATRIX.QR", "boom").is_numerical());
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(
            MatrixError::kernel("MATRIX.SVD", "no convergence").operation(),
            Some("MATRIX.SVD")
        );
        assert_eq!(MatrixError::buffer_length(1, 1, 0).operation(), None);
    }
}
