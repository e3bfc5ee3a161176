//! # matrso-ops
//!
//! The dense matrix operation catalogue for MatRSo.
//!
//! Every operation is a pure function over zero-copy [`MatrixView`]s that
//! validates shapes first and reports failure as a tagged
//! [`MatrixResult`](matrso_core::MatrixResult). Nothing here touches the output
//! slot or erases errors into sentinels; that is the job of the `matrso`
//! boundary.
//!
//! ## Operations
//!
//! | Group | Functions |
//! |-------|-----------|
//! | Arithmetic | [`add`], [`sub`], [`mul`], [`transpose`] |
//! | Scalars | [`trace`], [`norm`], [`determinant`], [`rank`] |
//! | Factorizations | [`inverse`], [`lu`], [`qr`], [`cholesky`], [`svd_values`], [`svd_full`], [`eigenvalues`], [`eigenvectors`] |
//! | Solvers | [`solve`], [`lstsq`], [`pinv`] |
//! | Generators | [`identity`], [`zeros`], [`diag`] |
//!
//! ## Kernels
//!
//! - LU (partial and full pivoting) and the general eigenproblem run on faer
//!   ([`kernels`])
//! - QR, Cholesky and SVD use `scirs2_linalg`
//!
//! ## Quick Start
//!
//! ```
//! use matrso_core::Matrix;
//! use matrso_ops::{identity, inverse, mul};
//!
//! let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]);
//! let inv = inverse(&a.view()).unwrap();
//! let product = mul(&a.view(), &inv.view()).unwrap();
//! assert!(product.approx_eq(&identity(2).unwrap(), 1e-12));
//! ```

#![warn(clippy::all)]

pub mod arithmetic;
pub mod catalogue;
pub mod decompositions;
pub mod generators;
pub mod kernels;
pub mod reductions;
pub mod solvers;


pub use arithmetic::{add, mul, sub, transpose};
pub use catalogue::Operation;
pub use decompositions::{
    cholesky, eigen, eigenvalues, eigenvectors, inverse, inverse_with_threshold, lu, qr,
    svd_full, svd_values, thin_svd, RealEigen, ThinSvd,
};
pub use generators::{diag, identity, identity_with_limit, zeros, zeros_with_limit};
pub use kernels::{FullPivLu, PartialPivLu};
pub use reductions::{determinant, norm, rank, rank_with_threshold, trace};
pub use solvers::{lstsq, lstsq_with_tolerance, pinv, pinv_with_tolerance, solve};

pub use matrso_core::MatrixView;
