//! Boundary contract tests
//!
//! Every catalogue operation is driven through the [`Engine`] with flat
//! row-major buffers, checking results, sentinels and slot behaviour.

use matrso::prelude::*;
use proptest::prelude::*;

fn view(rows: usize, cols: usize, data: &[f64]) -> ExternalView<'_> {
    ExternalView::new(rows, cols, data).unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < tol, "{a} != {e}");
    }
}

#[test]
fn test_arithmetic_round_trip() {
    let mut engine = Engine::new();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = [0.5, -1.0, 2.0, 0.0, 1.0, 1.0];

    let diff = engine.sub(view(2, 3, &a), view(2, 3, &b)).unwrap().clone();
    let back = engine.add(diff.as_view(), view(2, 3, &b)).unwrap();
    assert_close(back.data(), &a, 1e-12);

    let t = engine.transpose(view(2, 3, &a)).unwrap().clone();
    assert_eq!(t.shape(), (3, 2));
    let tt = engine.transpose(t.as_view()).unwrap();
    assert_eq!(tt.data(), &a);
}

#[test]
fn test_multiplicative_identity() {
    let mut engine = Engine::new();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let eye = engine.identity(3.0).unwrap().clone();
    let product = engine.mul(view(2, 3, &a), eye.as_view()).unwrap();
    assert_close(product.data(), &a, 1e-12);
}

#[test]
fn test_dimension_mismatch_sentinels() {
    let mut engine = Engine::new();
    let z6 = [0.0; 6];
    let z9 = [0.0; 9];
    let z4 = [0.0; 4];
    assert!(engine.add(view(2, 3, &z6), view(3, 2, &z6)).is_none());
    assert!(engine.mul(view(2, 3, &z6), view(2, 3, &z6)).is_none());
    assert!(engine.solve(view(3, 3, &z9), view(4, 1, &z4)).is_none());
    assert!(engine.lstsq(view(3, 2, &z6), view(2, 2, &z4)).is_none());
    assert!(engine.inverse(view(2, 3, &z6)).is_none());
    assert!(engine.lu(view(3, 2, &z6)).is_none());
    assert!(engine.cholesky(view(2, 3, &z6)).is_none());
    assert!(engine.eigenvalues(view(2, 3, &z6)).is_none());
    assert!(engine.eigenvectors(view(2, 3, &z6)).is_none());
}

#[test]
fn test_scalar_sentinels() {
    let engine = Engine::new();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert!(engine.trace(view(2, 3, &a)).is_nan());
    assert!(engine.determinant(view(2, 3, &a)).is_nan());

    // Norm and rank accept any shape
    assert!((engine.norm(view(2, 3, &a)) - 91.0f64.sqrt()).abs() < 1e-12);
    assert_eq!(engine.rank(view(2, 3, &a)), 2.0);
}

#[test]
fn test_bounded_generators() {
    let mut engine = Engine::new();
    assert!(engine.identity(0.0).is_none());
    assert!(engine.identity(10_001.0).is_none());
    assert!(engine.zeros(0.0, 5.0).is_none());
    assert!(engine.identity(-1.0).is_none());
    assert!(engine.identity(f64::INFINITY).is_none());

    let i3 = engine.identity(3.0).unwrap();
    assert_eq!(i3.shape(), (3, 3));
    assert_eq!(i3.data(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    let z = engine.zeros(2.0, 3.0).unwrap();
    assert_eq!(z.shape(), (2, 3));
    assert!(z.data().iter().all(|&v| v == 0.0));
}

#[test]
fn test_inverse_property_and_singular() {
    let mut engine = Engine::new();
    let a = [4.0, 7.0, 2.0, 6.0];
    let inv = engine.inverse(view(2, 2, &a)).unwrap().clone();
    let product = engine.mul(view(2, 2, &a), inv.as_view()).unwrap();
    assert_close(product.data(), &[1.0, 0.0, 0.0, 1.0], 1e-12);

    let singular = [1.0, 2.0, 2.0, 4.0];
    assert!(engine.inverse(view(2, 2, &singular)).is_none());
}

#[test]
fn test_solve_consistency() {
    let mut engine = Engine::new();
    let a = [2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0];
    let b = [8.0, -11.0, -3.0];
    let x = engine.solve(view(3, 3, &a), view(3, 1, &b)).unwrap().clone();
    assert_close(x.data(), &[2.0, 3.0, -1.0], 1e-10);
    let ax = engine.mul(view(3, 3, &a), x.as_view()).unwrap();
    assert_close(ax.data(), &b, 1e-10);
}

#[test]
fn test_cholesky_reconstruction_and_failure() {
    let mut engine = Engine::new();
    let spd = [4.0, 2.0, 2.0, 3.0];
    let l = engine.cholesky(view(2, 2, &spd)).unwrap().clone();
    assert_eq!(l.get(0, 1), Some(0.0));
    let lt = engine.transpose(l.as_view()).unwrap().clone();
    let llt = engine.mul(l.as_view(), lt.as_view()).unwrap();
    assert_close(llt.data(), &spd, 1e-12);

    let indefinite = [1.0, 0.0, 0.0, -1.0];
    assert!(engine.cholesky(view(2, 2, &indefinite)).is_none());
}

#[test]
fn test_pseudoinverse_idempotence() {
    let mut engine = Engine::new();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 7.0];
    let p = engine.pseudo_inverse(view(3, 2, &a)).unwrap().clone();
    assert_eq!(p.shape(), (2, 3));
    let pp = engine.pseudo_inverse(p.as_view()).unwrap();
    assert_eq!(pp.shape(), (3, 2));
    assert_close(pp.data(), &a, 1e-10);
}

#[test]
fn test_lstsq_line_fit() {
    let mut engine = Engine::new();
    let a = [1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0, 4.0];
    let b = [6.0, 5.0, 7.0, 10.0];
    let x = engine.lstsq(view(4, 2, &a), view(4, 1, &b)).unwrap();
    assert_close(x.data(), &[3.5, 1.4], 1e-10);
}

#[test]
fn test_factor_shapes() {
    let mut engine = Engine::new();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    assert_eq!(engine.qr(view(3, 2, &a)).unwrap().shape(), (3, 2));
    assert_eq!(engine.qr(view(2, 3, &a)).unwrap().shape(), (2, 3));
    assert_eq!(engine.svd(view(2, 3, &a)).unwrap().shape(), (2, 1));
    // (m + 2k) × max(m, n) with m = 2, n = 3, k = 2
    assert_eq!(engine.svd_full(view(2, 3, &a)).unwrap().shape(), (6, 3));

    let sq = [2.0, 1.0, 1.0, 3.0];
    assert_eq!(engine.lu(view(2, 2, &sq)).unwrap().shape(), (2, 2));
    assert_eq!(engine.eigenvalues(view(2, 2, &sq)).unwrap().shape(), (2, 1));
    assert_eq!(engine.eigenvectors(view(2, 2, &sq)).unwrap().shape(), (2, 2));
}

#[test]
fn test_diag_convention() {
    let mut engine = Engine::new();
    let column = [1.0, 2.0, 3.0];
    let built = engine.diag(view(3, 1, &column)).unwrap();
    assert_eq!(built.shape(), (3, 3));
    assert_eq!(built.get(2, 2), Some(3.0));

    let square = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let extracted = engine.diag(view(3, 3, &square)).unwrap();
    assert_eq!(extracted.shape(), (3, 1));
    assert_eq!(extracted.data(), &[1.0, 5.0, 9.0]);

    // 1 × 1 input follows the single-column rule
    let one = engine.diag(view(1, 1, &[7.0])).unwrap();
    assert_eq!(one.shape(), (1, 1));
}

#[test]
fn test_failure_keeps_previous_result() {
    let mut engine = Engine::new();
    engine.identity(2.0).unwrap();
    assert!(engine.zeros(0.0, 1.0).is_none());
    assert_eq!(engine.last_result().shape(), (2, 2));
}

#[test]
fn test_operation_names() {
    assert_eq!(Operation::PseudoInverse.name(), "MATRIX.PSEUDO_INV");
    assert_eq!(Operation::from_name("MATRIX.SVD_FULL"), Some(Operation::SvdFull));
}

proptest! {
    #[test]
    fn prop_transpose_round_trip(rows in 1usize..8, cols in 1usize..8, seed in -100.0f64..100.0) {
        let data: Vec<f64> = (0..rows * cols).map(|i| seed + i as f64).collect();
        let mut engine = Engine::new();
        let t = engine.transpose(view(rows, cols, &data)).unwrap().clone();
        prop_assert_eq!(t.shape(), (cols, rows));
        let back = engine.transpose(t.as_view()).unwrap();
        prop_assert_eq!(back.data(), data.as_slice());
    }
}

#[test]
fn test_eigenpairs_of_non_symmetric_matrix() {
    let mut engine = Engine::new();
    let a = [2.0, 1.0, 0.0, 3.0, 3.0, 1.0, 0.0, 2.0, 4.0];

    let values = engine.eigenvalues(view(3, 3, &a)).unwrap().clone();
    assert_eq!(values.shape(), (3, 1));
    let vectors = engine.eigenvectors(view(3, 3, &a)).unwrap().clone();
    assert_eq!(vectors.shape(), (3, 3));

    for (k, &lambda) in values.data().iter().enumerate() {
        let v: Vec<f64> = (0..3).map(|i| vectors.data()[i * 3 + k]).collect();
        assert!(v.iter().any(|x| x.abs() > 1e-6));
        for i in 0..3 {
            let av: f64 = (0..3).map(|j| a[i * 3 + j] * v[j]).sum();
            assert!(
                (av - lambda * v[i]).abs() < 1e-9,
                "eigenpair {k} fails on row {i}"
            );
        }
    }
}

#[test]
fn test_eigenvalues_real_parts_of_conjugate_pair() {
    let mut engine = Engine::new();
    let a = [4.0, 1.0, 2.0, 0.5, 3.0, 1.0, 2.0, -1.0, 5.0];

    let mut values = engine.eigenvalues(view(3, 3, &a)).unwrap().data().to_vec();
    values.sort_by(|x, y| x.total_cmp(y));
    assert_close(&values, &[2.745634, 2.745634, 6.508732], 1e-5);
}
