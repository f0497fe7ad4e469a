//! Partial autocorrelation via the Durbin-Levinson recursion.

use super::acf::acf;
use crate::core::TimeSeries;
use crate::error::{AcfError, Result};

/// Tolerance below which a Levinson denominator counts as collapsed.
const LEVINSON_TOL: f64 = 1e-10;

/// Sample PACF estimates phi(k,k) for orders 0..=K, with phi(0,0) = 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PacfResult {
    estimates: Vec<f64>,
}

impl PacfResult {
    /// Estimate at `lag`, if within range.
    pub fn estimate(&self, lag: usize) -> Option<f64> {
        self.estimates.get(lag).copied()
    }

    /// All estimates ordered by lag.
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

/// Compute the sample PACF up to `max_lag`.
///
/// Runs the Durbin-Levinson recursion over the biased sample ACF, so the
/// input contract is the same as [`acf`]'s. A collapsed recursion
/// denominator (possible for nearly deterministic input) is reported as
/// `DegenerateSeries`.
pub fn pacf(series: &TimeSeries, max_lag: usize) -> Result<PacfResult> {
    let rho = acf(series, max_lag)?;
    let rho = rho.estimates();

    let mut estimates = vec![0.0; max_lag + 1];
    estimates[0] = 1.0;
    estimates[1] = rho[1];

    // phi holds the order-(k-1) prediction coefficients entering step k.
    let mut phi = vec![0.0; max_lag + 1];
    phi[1] = rho[1];

    for k in 2..=max_lag {
        let mut num = rho[k];
        let mut denom = 1.0;
        for j in 1..k {
            num -= phi[j] * rho[k - j];
            denom -= phi[j] * rho[j];
        }
        if denom.abs() < LEVINSON_TOL {
            return Err(AcfError::DegenerateSeries);
        }
        let phi_kk = num / denom;
        estimates[k] = phi_kk;

        let prev = phi.clone();
        for j in 1..k {
            phi[j] = prev[j] - phi_kk * prev[k - j];
        }
        phi[k] = phi_kk;
    }

    Ok(PacfResult { estimates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn pacf_lag_zero_is_one_and_lag_one_equals_acf() {
        let values: Vec<f64> = (0..40).map(|i| (i as f64 * 0.3).sin() * 2.0).collect();
        let ts = series(&values);

        let p = pacf(&ts, 5).unwrap();
        let a = acf(&ts, 5).unwrap();

        assert_eq!(p.estimate(0), Some(1.0));
        assert_eq!(p.estimate(1), a.estimate(1));
    }

    #[test]
    fn pacf_result_has_max_lag_plus_one_estimates() {
        let values: Vec<f64> = (0..30).map(|i| (i as f64 * 0.9).cos()).collect();
        let p = pacf(&series(&values), 8).unwrap();
        assert_eq!(p.estimates().len(), 9);
        assert_eq!(p.max_lag(), 8);
    }

    #[test]
    fn pacf_of_noiseless_ar1_cuts_off_after_lag_one() {
        // Pure geometric decay: the order-1 model explains everything,
        // higher partial correlations vanish.
        let values: Vec<f64> = (0..60).map(|i| 0.8_f64.powi(i)).collect();
        let p = pacf(&series(&values), 4).unwrap();

        let p1 = p.estimate(1).unwrap();
        assert!(p1 > 0.5, "expected strong PACF(1), got {p1}");
        for k in 2..=4 {
            let pk = p.estimate(k).unwrap();
            assert!(
                pk.abs() < p1.abs(),
                "PACF({k}) = {pk} not below PACF(1) = {p1}"
            );
        }
    }

    #[test]
    fn pacf_constant_series_is_degenerate() {
        let ts = series(&[2.0; 12]);
        assert!(matches!(pacf(&ts, 3), Err(AcfError::DegenerateSeries)));
    }

    #[test]
    fn pacf_shares_acf_lag_contract() {
        let values: Vec<f64> = (0..10).map(|i| i as f64 + (i % 3) as f64).collect();
        let ts = series(&values);

        assert!(pacf(&ts, 9).is_ok());
        assert!(matches!(pacf(&ts, 10), Err(AcfError::InvalidLag { .. })));
        assert!(matches!(pacf(&ts, 0), Err(AcfError::InvalidLag { .. })));
    }

    #[test]
    fn pacf_alternating_series_has_negative_lag_one() {
        let values: Vec<f64> = (0..24)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let p = pacf(&series(&values), 2).unwrap();
        assert!(p.estimate(1).unwrap() < -0.5);
    }

    #[test]
    fn pacf_max_lag_one_needs_no_recursion() {
        let values: Vec<f64> = (0..15).map(|i| (i as f64).sqrt()).collect();
        let ts = series(&values);
        let p = pacf(&ts, 1).unwrap();
        let a = acf(&ts, 1).unwrap();
        assert_relative_eq!(
            p.estimate(1).unwrap(),
            a.estimate(1).unwrap(),
            epsilon = 1e-12
        );
    }
}
