//! TimeSeries data structure for a univariate realization.

use crate::error::{AcfError, Result};

/// An ordered sequence of real values indexed by discrete time step.
///
/// Produced by the simulator and consumed read-only by the estimators:
/// there is no mutation after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a time series from a vector of values.
    ///
    /// Fails when the vector is empty; a series carries at least one
    /// observation.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(AcfError::InsufficientData { needed: 1, got: 0 });
        }
        Ok(Self { values })
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty. Always false for a constructed series,
    /// kept for the conventional pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the values in generation order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample mean of the series.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sample variance of the series (n - 1 denominator).
    ///
    /// Returns NaN for a single observation.
    pub fn variance(&self) -> f64 {
        if self.values.len() < 2 {
            return f64::NAN;
        }
        let m = self.mean();
        let sum_sq: f64 = self.values.iter().map(|x| (x - m).powi(2)).sum();
        sum_sq / (self.values.len() - 1) as f64
    }

    /// Check if the series contains NaN or infinite values.
    pub fn has_missing_values(&self) -> bool {
        self.values.iter().any(|v| v.is_nan() || v.is_infinite())
    }
}
