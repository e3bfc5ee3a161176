//! # matrso-core
//!
//! Core matrix value, external layout adapter and dimension validation for MatRSo.
//!
//! This crate provides the building blocks every catalogue operation relies on:
//!
//! - **Dense matrix** ([`Matrix`]) backed by a row-major `Array2<f64>`
//! - **Layout adapter** ([`to_internal`], [`OutputSlot`]) converting between the
//!   external flat row-major format and internal matrices
//! - **Dimension validator** ([`validate`]) with the shape rules of each operation
//! - **Errors** ([`MatrixError`]) distinguishing precondition and numerical failures
//! - **Configuration** ([`EngineConfig`]) for generator bounds and tolerances
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! All array storage goes through `scirs2_core::ndarray_ext`. Direct use of
//! `ndarray` is not permitted.
//!
//! ### Memory Layout
//!
//! Matrices are C-contiguous (row-major), so an external buffer is reinterpreted
//! in place: `internal[(i, j)] == buffer[i * cols + j]`.
//!
//! ## Quick Start
//!
//! ```
//! use matrso_core::{to_internal, ExternalView, OutputSlot};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let input = ExternalView::new(2, 3, &data).unwrap();
//!
//! // Zero-copy view of the caller's buffer
//! let m = to_internal(&input).unwrap();
//! assert_eq!(m[[1, 0]], 4.0);
//!
//! // Results leave through the single reusable slot
//! let mut slot = OutputSlot::new();
//! let out = slot.write_matrix(&m.t());
//! assert_eq!(out.shape(), (3, 2));
//! assert_eq!(out.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize [`EngineConfig`]

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod layout;
pub mod types;
pub mod validate;


pub use config::EngineConfig;
pub use error::{MatrixError, MatrixResult};
pub use layout::{
    from_internal, to_internal, vector_to_external, ExternalArray, ExternalView, OutputSlot,
    VectorShape,
};
pub use types::{Matrix, MatrixView};
pub use validate::MAX_DIMENSION;
