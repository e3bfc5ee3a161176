//! Solve a small linear system through the boundary and inspect the result
//!
//! Run with: cargo run -p matrso --example solve_system --features tracing

use anyhow::{Context, Result};
use matrso::prelude::*;
use matrso::tracing_support::{init_tracing, TracingConfig};

fn main() -> Result<()> {
    init_tracing(TracingConfig {
        filter: "matrso=debug".to_string(),
        ..TracingConfig::default()
    })?;

    let mut engine = Engine::with_config(EngineConfig::from_env());

    let a = [3.0, 2.0, -1.0, 2.0, -2.0, 4.0, -1.0, 0.5, -1.0];
    let b = [1.0, -2.0, 0.0];
    let a_view = ExternalView::new(3, 3, &a)?;
    let b_view = ExternalView::new(3, 1, &b)?;

    println!("det(A)  = {:.6}", engine.determinant(a_view));
    println!("rank(A) = {}", engine.rank(a_view));

    let x = engine
        .solve(a_view, b_view)
        .context("solve failed")?
        .clone();
    println!("x       = {:?}", x.data());

    let residual = engine
        .mul(a_view, x.as_view())
        .context("product failed")?
        .data()
        .iter()
        .zip(b.iter())
        .map(|(ax, b)| (ax - b).abs())
        .fold(0.0, f64::max);
    println!("max |Ax - b| = {:.3e}", residual);

    // A failing call only shows up in the debug log
    let rectangular = ExternalView::new(1, 3, &b)?;
    if engine.inverse(rectangular).is_none() {
        println!("inverse of a 1x3 matrix: no result");
    }

    Ok(())
}
