//! Stable catalogue names for every operation
//!
//! The names (`MATRIX.ADD`, `MATRIX.SVD_FULL`, ...) are what a host binding
//! registers, what error messages carry, and what the boundary attaches to its
//! tracing events.

use std::fmt;

/// One entry of the operation catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Transpose,
    Trace,
    Norm,
    Determinant,
    Rank,
    Inverse,
    Lu,
    Qr,
    Cholesky,
    Svd,
    SvdFull,
    Eigenvalues,
    Eigenvectors,
    Solve,
    Lstsq,
    PseudoInverse,
    Identity,
    Zeros,
    Diag,
}

impl Operation {
    /// Every operation, in catalogue order
    pub const ALL: [Operation; 22] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Transpose,
        Operation::Trace,
        Operation::Norm,
        Operation::Determinant,
        Operation::Rank,
        Operation::Inverse,
        Operation::Lu,
        Operation::Qr,
        Operation::Cholesky,
        Operation::Svd,
        Operation::SvdFull,
        Operation::Eigenvalues,
        Operation::Eigenvectors,
        Operation::Solve,
        Operation::Lstsq,
        Operation::PseudoInverse,
        Operation::Identity,
        Operation::Zeros,
        Operation::Diag,
    ];

    /// Catalogue name, e.g. `MATRIX.PSEUDO_INV`
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "MATRIX.ADD",
            Operation::Sub => "MATRIX.SUB",
            Operation::Mul => "MATRIX.MUL",
            Operation::Transpose => "MATRIX.TRANSPOSE",
            Operation::Trace => "MATRIX.TRACE",
            Operation::Norm => "MATRIX.NORM",
            Operation::Determinant => "MATRIX.DETERMINANT",
            Operation::Rank => "MATRIX.RANK",
            Operation::Inverse => "MATRIX.INVERSE",
            Operation::Lu => "MATRIX.LU",
            Operation::Qr => "MATRIX.QR",
            Operation::Cholesky => "MATRIX.CHOLESKY",
            Operation::Svd => "MATRIX.SVD",
            Operation::SvdFull => "MATRIX.SVD_FULL",
            Operation::Eigenvalues => "MATRIX.EIGENVALUES",
            Operation::Eigenvectors => "MATRIX.EIGENVECTORS",
            Operation::Solve => "MATRIX.SOLVE",
            Operation::Lstsq => "MATRIX.LSTSQ",
            Operation::PseudoInverse => "MATRIX.PSEUDO_INV",
            Operation::Identity => "MATRIX.IDENTITY",
            Operation::Zeros => "MATRIX.ZEROS",
            Operation::Diag => "MATRIX.DIAG",
        }
    }

    /// One-line description shown by host bindings
    pub const fn summary(self) -> &'static str {
        match self {
            Operation::Add => "Elementwise sum of two matrices",
            Operation::Sub => "Elementwise difference of two matrices",
            Operation::Mul => "Matrix product",
            Operation::Transpose => "Transpose of a matrix",
            Operation::Trace => "Sum of the diagonal of a square matrix",
            Operation::Norm => "Frobenius norm",
            Operation::Determinant => "Determinant of a square matrix",
            Operation::Rank => "Numerical rank",
            Operation::Inverse => "Inverse of a square matrix",
            Operation::Lu => "Combined L\\U factor from partial-pivot LU",
            Operation::Qr => "Upper-triangular R factor from QR",
            Operation::Cholesky => "Lower Cholesky factor of a positive definite matrix",
            Operation::Svd => "Singular values as a column vector",
            Operation::SvdFull => "U, diagonal singular values and V^T stacked vertically",
            Operation::Eigenvalues => "Real parts of the eigenvalues",
            Operation::Eigenvectors => "Real parts of the eigenvectors, one per column",
            Operation::Solve => "Exact solution of Ax = b",
            Operation::Lstsq => "Least squares solution of Ax = b",
            Operation::PseudoInverse => "Moore-Penrose pseudoinverse",
            Operation::Identity => "n x n identity matrix",
            Operation::Zeros => "m x n zero matrix",
            Operation::Diag => "Build a diagonal matrix from a column, or extract a diagonal",
        }
    }

    /// Whether the boundary reports this operation as a scalar
    pub const fn returns_scalar(self) -> bool {
        matches!(
            self,
            Operation::Trace | Operation::Norm | Operation::Determinant | Operation::Rank
        )
    }

    /// Look up an operation by catalogue name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
