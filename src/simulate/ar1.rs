//! First-order autoregressive process simulation.
//!
//! Generates one realization of
//!
//! x(t) = mu + phi * (x(t-1) - mu) + eps(t)
//!
//! with i.i.d. normal innovations eps(t) ~ N(0, sigma^2) drawn from a
//! caller-supplied random number generator. All randomness flows through
//! that generator, so a seeded `StdRng` gives bit-identical realizations
//! across runs.

use crate::core::TimeSeries;
use crate::error::{AcfError, Result};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;

/// Rule for drawing the first value of the realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialState {
    /// Draw x(0) from the stationary marginal N(mu, sigma^2 / (1 - phi^2)).
    /// Only defined for |phi| < 1.
    #[default]
    Stationary,
    /// Start at the process mean, x(0) = mu. Valid for any phi.
    FixedAtMean,
}

/// Specification of an AR(1) realization.
///
/// Built once per simulation run; the builder methods follow the usual
/// construct-then-refine pattern.
///
/// # Example
/// ```
/// use ar_acf::simulate::{Ar1Spec, InitialState};
///
/// let spec = Ar1Spec::new(0.8, 100)
///     .with_mean(10.0)
///     .with_variance(2.0)
///     .with_initial_state(InitialState::FixedAtMean);
/// assert!(spec.validate_stationary().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ar1Spec {
    /// Autoregressive coefficient phi.
    pub phi: f64,
    /// Process mean mu.
    pub mean: f64,
    /// Innovation variance sigma^2.
    pub variance: f64,
    /// Number of values to generate.
    pub len: usize,
    /// Rule for the first value.
    pub initial_state: InitialState,
}

impl Ar1Spec {
    /// Create a spec with mean 0 and unit innovation variance.
    pub fn new(phi: f64, len: usize) -> Self {
        Self {
            phi,
            mean: 0.0,
            variance: 1.0,
            len,
            initial_state: InitialState::default(),
        }
    }

    /// Set the process mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Set the innovation variance.
    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    /// Set the initial-state rule.
    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// Checks shared by every simulation mode.
    fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Err(AcfError::InvalidParameter(
                "length must be positive".to_string(),
            ));
        }
        if !self.variance.is_finite() || self.variance <= 0.0 {
            return Err(AcfError::InvalidParameter(format!(
                "innovation variance must be positive, got {}",
                self.variance
            )));
        }
        if !self.phi.is_finite() || !self.mean.is_finite() {
            return Err(AcfError::InvalidParameter(
                "phi and mean must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict stationarity check for callers that reject |phi| >= 1.
    ///
    /// The simulator itself does not require this: see [`simulate_ar1`].
    pub fn validate_stationary(&self) -> Result<()> {
        self.validate()?;
        if self.phi.abs() >= 1.0 {
            return Err(AcfError::InvalidParameter(format!(
                "stationarity requires |phi| < 1, got {}",
                self.phi
            )));
        }
        Ok(())
    }
}

/// Simulate one realization of the process described by `spec`.
///
/// The recurrence is evaluated step by step in generation order, so the
/// output is bit-identical for the same spec and RNG stream.
///
/// |phi| >= 1 is deliberately accepted: the recurrence is evaluated as
/// written and the realization diverges at the rate the coefficient
/// dictates, with overflow surfacing as infinities. Callers that want
/// strict stationarity should call [`Ar1Spec::validate_stationary`] first.
/// The one exception is [`InitialState::Stationary`], whose marginal
/// distribution only exists for |phi| < 1; it fails with
/// `InvalidParameter` otherwise.
pub fn simulate_ar1<R: Rng + ?Sized>(spec: &Ar1Spec, rng: &mut R) -> Result<TimeSeries> {
    spec.validate()?;

    let innovations = Normal::new(0.0, spec.variance.sqrt())
        .map_err(|e| AcfError::InvalidParameter(format!("innovation distribution: {e}")))?;

    let x0 = match spec.initial_state {
        InitialState::FixedAtMean => spec.mean,
        InitialState::Stationary => {
            if spec.phi.abs() >= 1.0 {
                return Err(AcfError::InvalidParameter(format!(
                    "stationary initial draw requires |phi| < 1, got {}",
                    spec.phi
                )));
            }
            let marginal_sd = (spec.variance / (1.0 - spec.phi * spec.phi)).sqrt();
            let marginal = Normal::new(spec.mean, marginal_sd)
                .map_err(|e| AcfError::InvalidParameter(format!("marginal distribution: {e}")))?;
            marginal.sample(rng)
        }
    };

    let mut values = Vec::with_capacity(spec.len);
    let mut prev = x0;
    values.push(prev);
    for _ in 1..spec.len {
        let next = spec.mean + spec.phi * (prev - spec.mean) + innovations.sample(rng);
        values.push(next);
        prev = next;
    }

    TimeSeries::from_values(values)
}
