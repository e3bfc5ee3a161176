//! The sentinel boundary
//!
//! [`Engine`] is the single point where tagged results from the catalogue cross
//! to the caller. Matrix-valued operations return `Option<&ExternalArray>`
//! (`None` is the null sentinel) and scalar-valued operations return `f64`
//! (quiet NaN is the sentinel). The failure reason is logged through `tracing`
//! and then dropped.
//!
//! # Output slot
//!
//! Every matrix result is written into one reusable buffer owned by the engine.
//! The returned reference borrows the engine mutably, so it is readable until
//! the next call and the compiler rejects any use after that. To feed a result
//! into the next call, copy it out first:
//!
//! ```
//! use matrso::{Engine, ExternalView};
//!
//! let mut engine = Engine::new();
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let a = ExternalView::new(2, 3, &data).unwrap();
//!
//! let t = engine.transpose(a).unwrap().clone();
//! let back = engine.transpose(t.as_view()).unwrap();
//! assert_eq!(back.data(), &data);
//! ```
//!
//! A failed call leaves the slot untouched.
//!
//! # Fault containment
//!
//! Each call runs under `catch_unwind`; a panic from the catalogue or the
//! kernel library becomes an
//! [`InternalFault`](matrso_core::MatrixError::InternalFault) and then the
//! sentinel, never an unwind across the boundary.

use matrso_core::validate::dimension_from_scalar;
use matrso_core::{
    to_internal, EngineConfig, ExternalArray, ExternalView, Matrix, MatrixError, MatrixResult,
    OutputSlot, VectorShape,
};
use matrso_ops::Operation;
use scirs2_core::ndarray_ext::Array1;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, trace};

/// Catalogue front end with sentinel failures and a single output slot
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    slot: OutputSlot,
}

impl Engine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            slot: OutputSlot::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The most recent successful matrix result (empty before the first one)
    pub fn last_result(&self) -> &ExternalArray {
        self.slot.current()
    }

    // ---- arithmetic -------------------------------------------------------

    /// `A + B`; `None` on shape mismatch
    pub fn add(&mut self, a: ExternalView<'_>, b: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Add, |_| {
            matrso_ops::add(&to_internal(&a)?, &to_internal(&b)?)
        })
    }

    /// `A - B`; `None` on shape mismatch
    pub fn sub(&mut self, a: ExternalView<'_>, b: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Sub, |_| {
            matrso_ops::sub(&to_internal(&a)?, &to_internal(&b)?)
        })
    }

    /// `A · B`; `None` when `A.cols != B.rows`
    pub fn mul(&mut self, a: ExternalView<'_>, b: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Mul, |_| {
            matrso_ops::mul(&to_internal(&a)?, &to_internal(&b)?)
        })
    }

    /// `Aᵀ`
    pub fn transpose(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Transpose, |_| {
            Ok(matrso_ops::transpose(&to_internal(&a)?))
        })
    }

    // ---- scalars ----------------------------------------------------------

    /// Sum of the diagonal; NaN for rectangular input
    pub fn trace(&self, a: ExternalView<'_>) -> f64 {
        self.scalar_op(Operation::Trace, |_| matrso_ops::trace(&to_internal(&a)?))
    }

    /// Frobenius norm
    pub fn norm(&self, a: ExternalView<'_>) -> f64 {
        self.scalar_op(Operation::Norm, |_| Ok(matrso_ops::norm(&to_internal(&a)?)))
    }

    /// Determinant; NaN for rectangular input
    pub fn determinant(&self, a: ExternalView<'_>) -> f64 {
        self.scalar_op(Operation::Determinant, |_| {
            matrso_ops::determinant(&to_internal(&a)?)
        })
    }

    /// Numerical rank as a double
    ///
    /// Uses `rank_threshold` from the configuration when set.
    pub fn rank(&self, a: ExternalView<'_>) -> f64 {
        self.scalar_op(Operation::Rank, |config| {
            let a = to_internal(&a)?;
            let rank = match config.rank_threshold {
                Some(threshold) => matrso_ops::rank_with_threshold(&a, threshold),
                None => matrso_ops::rank(&a),
            };
            Ok(rank as f64)
        })
    }

    // ---- factorizations ---------------------------------------------------

    /// `A⁻¹`; `None` for rectangular or singular input
    pub fn inverse(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Inverse, |config| {
            matrso_ops::inverse_with_threshold(&to_internal(&a)?, config.rank_threshold)
        })
    }

    /// Combined `L\U` factor of partial-pivot LU
    pub fn lu(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Lu, |_| matrso_ops::lu(&to_internal(&a)?))
    }

    /// Upper-trapezoidal `R` factor of QR
    pub fn qr(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Qr, |_| matrso_ops::qr(&to_internal(&a)?))
    }

    /// Lower Cholesky factor; `None` unless `A` is square and positive definite
    pub fn cholesky(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Cholesky, |_| {
            matrso_ops::cholesky(&to_internal(&a)?)
        })
    }

    /// Singular values as a `min(m, n) × 1` column
    pub fn svd(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.vector_op(Operation::Svd, |_| matrso_ops::svd_values(&to_internal(&a)?))
    }

    /// `U`, `diag(s)` and `Vᵀ` stacked into one `(m + 2k) × max(m, n)` matrix
    pub fn svd_full(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::SvdFull, |_| {
            matrso_ops::svd_full(&to_internal(&a)?)
        })
    }

    /// Real parts of the eigenvalues as an `n × 1` column
    pub fn eigenvalues(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.vector_op(Operation::Eigenvalues, |_| {
            matrso_ops::eigenvalues(&to_internal(&a)?)
        })
    }

    /// Real parts of the eigenvectors, column `i` paired with eigenvalue `i`
    pub fn eigenvectors(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Eigenvectors, |_| {
            matrso_ops::eigenvectors(&to_internal(&a)?)
        })
    }

    // ---- solvers ----------------------------------------------------------

    /// Exact solve of `A · X = B`
    pub fn solve(&mut self, a: ExternalView<'_>, b: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Solve, |_| {
            matrso_ops::solve(&to_internal(&a)?, &to_internal(&b)?)
        })
    }

    /// Least squares solve of `A · X ≈ B`
    ///
    /// Uses `pinv_tolerance` from the configuration when set.
    pub fn lstsq(&mut self, a: ExternalView<'_>, b: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Lstsq, |config| {
            matrso_ops::lstsq_with_tolerance(
                &to_internal(&a)?,
                &to_internal(&b)?,
                config.pinv_tolerance,
            )
        })
    }

    /// Moore-Penrose pseudoinverse
    ///
    /// Uses `pinv_tolerance` from the configuration when set.
    pub fn pseudo_inverse(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::PseudoInverse, |config| {
            matrso_ops::pinv_with_tolerance(&to_internal(&a)?, config.pinv_tolerance)
        })
    }

    // ---- generators -------------------------------------------------------

    /// `n × n` identity; `n` is truncated toward zero
    pub fn identity(&mut self, n: f64) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Identity, |config| {
            let op = Operation::Identity.name();
            let n = dimension_from_scalar(op, n, config.max_dimension)?;
            matrso_ops::identity_with_limit(n, config.max_dimension)
        })
    }

    /// `rows × cols` zeros; both sizes are truncated toward zero
    pub fn zeros(&mut self, rows: f64, cols: f64) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Zeros, |config| {
            let op = Operation::Zeros.name();
            let rows = dimension_from_scalar(op, rows, config.max_dimension)?;
            let cols = dimension_from_scalar(op, cols, config.max_dimension)?;
            matrso_ops::zeros_with_limit(rows, cols, config.max_dimension)
        })
    }

    /// Build a diagonal matrix from a column, or extract a diagonal
    pub fn diag(&mut self, a: ExternalView<'_>) -> Option<&ExternalArray> {
        self.matrix_op(Operation::Diag, |_| Ok(matrso_ops::diag(&to_internal(&a)?)))
    }

    // ---- boundary plumbing ------------------------------------------------

    fn matrix_op<F>(&mut self, operation: Operation, f: F) -> Option<&ExternalArray>
    where
        F: FnOnce(&EngineConfig) -> MatrixResult<Matrix>,
    {
        let matrix = contain(operation, || f(&self.config))?;
        let out = self.slot.write_matrix(&matrix.view());
        trace!(
            operation = operation.name(),
            rows = out.rows(),
            cols = out.cols(),
            "operation succeeded"
        );
        Some(out)
    }

    fn vector_op<F>(&mut self, operation: Operation, f: F) -> Option<&ExternalArray>
    where
        F: FnOnce(&EngineConfig) -> MatrixResult<Array1<f64>>,
    {
        let vector = contain(operation, || f(&self.config))?;
        let out = self.slot.write_vector(&vector.view(), VectorShape::Column);
        trace!(
            operation = operation.name(),
            rows = out.rows(),
            cols = out.cols(),
            "operation succeeded"
        );
        Some(out)
    }

    fn scalar_op<F>(&self, operation: Operation, f: F) -> f64
    where
        F: FnOnce(&EngineConfig) -> MatrixResult<f64>,
    {
        match contain(operation, || f(&self.config)) {
            Some(value) => {
                trace!(operation = operation.name(), value, "operation succeeded");
                value
            }
            None => f64::NAN,
        }
    }
}

/// Run `f`, turning panics into `InternalFault` and any error into `None`
fn contain<T>(operation: Operation, f: impl FnOnce() -> MatrixResult<T>) -> Option<T> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(MatrixError::internal_fault(
            operation.name(),
            panic_message(payload.as_ref()),
        ))
    });

    match outcome {
        Ok(value) => Some(value),
        Err(error) => {
            debug!(
                operation = operation.name(),
                precondition = error.is_precondition(),
                error = %error,
                "operation failed"
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
