//! # ar-acf
//!
//! AR(1) process simulation and sample autocorrelation estimation.
//!
//! Provides a seeded, reproducible simulator for first-order autoregressive
//! processes and estimators for the sample autocorrelation (ACF) and partial
//! autocorrelation (PACF) functions. The classic demonstration this supports:
//! a positive coefficient produces a geometrically decaying correlogram, the
//! same coefficient negated produces the alternating-sign version.
//!
//! ```
//! use ar_acf::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let spec = Ar1Spec::new(0.8, 100);
//! let mut rng = StdRng::seed_from_u64(42);
//! let series = simulate_ar1(&spec, &mut rng).unwrap();
//! let result = acf(&series, 10).unwrap();
//! assert_eq!(result.estimate(0), Some(1.0));
//! ```

#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod core;
pub mod error;
pub mod simulate;

pub use error::{AcfError, Result};

pub mod prelude {
    pub use crate::analysis::{
        acf, acf_with, pacf, AcfConfig, AcfResult, Engine, Normalization, PacfResult,
    };
    pub use crate::core::TimeSeries;
    pub use crate::error::{AcfError, Result};
    pub use crate::simulate::{simulate_ar1, Ar1Spec, InitialState};
}
