//! Stochastic process simulation.

mod ar1;

pub use ar1::{simulate_ar1, Ar1Spec, InitialState};
