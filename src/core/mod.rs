//! Core data structures for simulation and estimation.

mod time_series;

pub use time_series::TimeSeries;
