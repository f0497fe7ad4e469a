//! Sample autocorrelation analysis.

mod acf;
mod pacf;

pub use acf::{acf, acf_with, AcfConfig, AcfResult, Engine, Normalization};
pub use pacf::{pacf, PacfResult};
