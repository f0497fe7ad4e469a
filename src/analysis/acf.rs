//! Sample autocorrelation function estimation.
//!
//! The default estimator is the biased one: every lag-k covariance is
//! divided by the full-series centered sum of squares. That is the
//! conventional choice for correlogram display and what standard
//! statistical tooling reports, and it keeps every estimate in [-1, 1].

use crate::core::TimeSeries;
use crate::error::{AcfError, Result};
use rustfft::{num_complex::Complex64, FftPlanner};

/// Relative tolerance below which the centered sum of squares counts as zero.
const DEGENERATE_TOL: f64 = 1e-12;

/// Problem size (N * K) above which the auto engine switches to FFT.
const FFT_CROSSOVER: usize = 16_384;

/// Denominator convention for the lag covariances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide every lag by the full-series sum of squares (N terms).
    /// Guarantees |rho(k)| <= 1.
    #[default]
    Biased,
    /// Divide the lag-k covariance by its own term count (N - k).
    /// Estimates at high lags may exceed 1 in magnitude.
    Unbiased,
}

/// Computation engine for the lag covariances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Pick [`Engine::Direct`] or [`Engine::Fft`] based on problem size.
    #[default]
    Auto,
    /// Lag loop over the centered series, O(N * K).
    Direct,
    /// Wiener-Khinchin via FFT, O(N log N) independent of K.
    Fft,
}

/// Configuration for [`acf_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AcfConfig {
    pub normalization: Normalization,
    pub engine: Engine,
}

impl AcfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the denominator convention.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Set the computation engine.
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }
}

/// Sample ACF estimates for lags 0..=K.
#[derive(Debug, Clone, PartialEq)]
pub struct AcfResult {
    estimates: Vec<f64>,
}

impl AcfResult {
    /// Estimate at `lag`, if within range.
    pub fn estimate(&self, lag: usize) -> Option<f64> {
        self.estimates.get(lag).copied()
    }

    /// All estimates ordered by lag, rho(0) first.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Largest lag in the result.
    pub fn max_lag(&self) -> usize {
        self.estimates.len() - 1
    }

    /// Iterate over (lag, estimate) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.estimates.iter().copied().enumerate()
    }
}

/// Compute the sample ACF up to `max_lag` with default settings.
///
/// # Errors
/// * `InsufficientData` when the series is shorter than 2.
/// * `InvalidLag` when `max_lag` is outside `1..=N-1`.
/// * `DegenerateSeries` when the series is constant; correlation is
///   undefined beyond lag 0 and no partial result is returned.
pub fn acf(series: &TimeSeries, max_lag: usize) -> Result<AcfResult> {
    acf_with(series, max_lag, &AcfConfig::default())
}

/// Compute the sample ACF with explicit normalization and engine choices.
///
/// Same contract as [`acf`]; both engines produce the same estimates up to
/// floating tolerance.
pub fn acf_with(series: &TimeSeries, max_lag: usize, config: &AcfConfig) -> Result<AcfResult> {
    let values = series.values();
    let n = values.len();
    if n < 2 {
        return Err(AcfError::InsufficientData { needed: 2, got: n });
    }
    if max_lag == 0 || max_lag > n - 1 {
        return Err(AcfError::InvalidLag {
            lag: max_lag,
            max: n - 1,
        });
    }

    let mean = series.mean();
    let centered: Vec<f64> = values.iter().map(|&x| x - mean).collect();
    let sum_sq: f64 = centered.iter().map(|&d| d * d).sum();

    // Scale-aware zero test so a constant series never reaches the division.
    let scale = values.iter().map(|&x| x * x).sum::<f64>().max(1.0);
    if sum_sq <= DEGENERATE_TOL * scale {
        return Err(AcfError::DegenerateSeries);
    }

    let use_fft = match config.engine {
        Engine::Direct => false,
        Engine::Fft => true,
        Engine::Auto => n * max_lag > FFT_CROSSOVER,
    };

    let lag_sums = if use_fft {
        lag_sums_fft(&centered, max_lag)
    } else {
        lag_sums_direct(&centered, max_lag)
    };

    let mut estimates = Vec::with_capacity(max_lag + 1);
    estimates.push(1.0);
    for k in 1..=max_lag {
        let rho = match config.normalization {
            Normalization::Biased => lag_sums[k] / sum_sq,
            Normalization::Unbiased => lag_sums[k] * n as f64 / ((n - k) as f64 * sum_sq),
        };
        estimates.push(rho);
    }

    Ok(AcfResult { estimates })
}

/// Raw lag sums sum_t c(t) * c(t+k) for k = 0..=max_lag.
fn lag_sums_direct(centered: &[f64], max_lag: usize) -> Vec<f64> {
    let n = centered.len();
    (0..=max_lag)
        .map(|k| (0..n - k).map(|t| centered[t] * centered[t + k]).sum())
        .collect()
}

/// Same lag sums via the Wiener-Khinchin theorem: forward FFT, squared
/// magnitudes, inverse FFT. Zero-padding to at least 2N makes the circular
/// correlation coincide with the linear one.
fn lag_sums_fft(centered: &[f64], max_lag: usize) -> Vec<f64> {
    let n = centered.len();
    let padded = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex64> = centered
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .chain(std::iter::repeat(Complex64::new(0.0, 0.0)).take(padded - n))
        .collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(padded).process(&mut buffer);
    for v in buffer.iter_mut() {
        *v = Complex64::new(v.norm_sqr(), 0.0);
    }
    planner.plan_fft_inverse(padded).process(&mut buffer);

    // rustfft leaves the inverse transform unnormalized.
    (0..=max_lag)
        .map(|k| buffer[k].re / padded as f64)
        .collect()
}
