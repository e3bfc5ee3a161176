//! Engine configuration
//!
//! Defaults reproduce the documented catalogue behaviour. Overrides can only
//! tighten the generator bound: `max_dimension` is clamped to
//! [`MAX_DIMENSION`](crate::validate::MAX_DIMENSION).
//!
//! # Environment Variables
//!
//! - `MATRSO_MAX_DIMENSION`: generator cap (integer)
//! - `MATRSO_RANK_THRESHOLD`: relative pivot threshold for rank estimation
//! - `MATRSO_PINV_TOLERANCE`: absolute singular-value cutoff for SVD solves

use crate::validate::MAX_DIMENSION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for the catalogue
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Upper bound for generator dimensions
    pub max_dimension: usize,
    /// Relative pivot threshold for rank and singularity detection
    ///
    /// `None` uses `ε · min(rows, cols)`.
    pub rank_threshold: Option<f64>,
    /// Absolute cutoff below which singular values are treated as zero
    ///
    /// `None` uses the per-operation default (`ε · max(m, n) · σ_max` for the
    /// pseudoinverse, `ε · min(m, n) · σ_max` for least squares).
    pub pinv_tolerance: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            rank_threshold: None,
            pinv_tolerance: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MATRSO_*` environment variables
    ///
    /// Malformed or out-of-range values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(max) = lookup("MATRSO_MAX_DIMENSION").and_then(|s| s.trim().parse::<usize>().ok())
        {
            config = config.with_max_dimension(max);
        }
        config.rank_threshold = lookup("MATRSO_RANK_THRESHOLD")
            .and_then(|s| parse_tolerance(&s))
            .or(config.rank_threshold);
        config.pinv_tolerance = lookup("MATRSO_PINV_TOLERANCE")
            .and_then(|s| parse_tolerance(&s))
            .or(config.pinv_tolerance);

        config
    }

    /// Set the generator cap, clamped to `[1, MAX_DIMENSION]`
    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension.clamp(1, MAX_DIMENSION);
        self
    }

    /// Override the rank threshold
    pub fn with_rank_threshold(mut self, threshold: f64) -> Self {
        self.rank_threshold = Some(threshold);
        self
    }

    /// Override the pseudoinverse / least squares cutoff
    pub fn with_pinv_tolerance(mut self, tolerance: f64) -> Self {
        self.pinv_tolerance = Some(tolerance);
        self
    }
}

fn parse_tolerance(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
}
