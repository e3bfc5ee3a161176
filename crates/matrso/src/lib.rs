//! # MatRSo - Dense Matrix Catalogue for COOLJAPAN
//!
//! A fixed catalogue of dense linear algebra operations over `f64` matrices,
//! exposed through a flat row-major boundary with sentinel failures.
//!
//! This is the **facade crate**: it re-exports the building blocks and adds the
//! boundary layer on top of them.
//!
//! ## Quick Start
//!
//! ```
//! use matrso::prelude::*;
//!
//! let mut engine = Engine::new();
//!
//! let a = [4.0, 1.0, 2.0, 3.0];
//! let b = [1.0, 2.0];
//! let x = engine
//!     .solve(ExternalView::new(2, 2, &a)?, ExternalView::new(2, 1, &b)?)
//!     .expect("regular system");
//! assert_eq!(x.shape(), (2, 1));
//!
//! // Failures are sentinels: None for matrices, NaN for scalars
//! assert!(engine.trace(ExternalView::new(1, 2, &b)?).is_nan());
//! # Ok::<(), matrso::core::MatrixError>(())
//! ```
//!
//! ## Components
//!
//! ### Core ([`core`])
//!
//! [`Matrix`](core::Matrix), the layout adapter, the output slot, the shape
//! validator, [`MatrixError`](core::MatrixError) and
//! [`EngineConfig`](core::EngineConfig).
//!
//! ### Operations ([`ops`])
//!
//! The catalogue as pure functions returning tagged results. Use these
//! directly when the failure reason matters.
//!
//! ```
//! use matrso::core::{Matrix, MatrixError};
//! use matrso::ops::cholesky;
//!
//! let indefinite = Matrix::from_rows(&[[1.0, 2.0], [2.0, 1.0]]);
//! assert!(matches!(
//!     cholesky(&indefinite.view()),
//!     Err(MatrixError::NotPositiveDefinite { .. })
//! ));
//! ```
//!
//! ### Boundary ([`Engine`], [`with_engine`])
//!
//! Converts inputs, runs the operation under fault containment, writes the
//! result into the single output slot and erases failures into sentinels.
//!
//! ## Features
//!
//! - `tracing`: install a `tracing-subscriber` via [`tracing_support::init_tracing`]
//! - `serde`: serialize/deserialize [`EngineConfig`](core::EngineConfig)
//! - `full`: Enable all features

#![warn(clippy::all)]

pub use matrso_core as core;
pub use matrso_ops as ops;

pub mod engine;
pub mod global;
pub mod tracing_support;

pub use engine::Engine;
pub use global::{reset_engine, with_engine};
pub use matrso_core::{EngineConfig, ExternalArray, ExternalView};
pub use matrso_ops::Operation;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use matrso::prelude::*;
    //!
    //! let mut engine = Engine::new();
    //! assert_eq!(engine.identity(3.0).map(|out| out.shape()), Some((3, 3)));
    //! ```

    // Boundary
    pub use crate::engine::Engine;
    pub use crate::global::with_engine;

    // Core types
    pub use crate::core::{
        EngineConfig, ExternalArray, ExternalView, Matrix, MatrixError, MatrixResult,
    };

    // Catalogue
    pub use crate::ops::Operation;
}
