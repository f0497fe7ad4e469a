//! Side-by-side correlograms for AR(1) with phi = +0.8 and phi = -0.8.
//!
//! Stand-in for a plotting front end: prints each lag estimate with a text
//! bar so the decaying vs alternating sign structure is visible.
//!
//! Run with: cargo run --example ar1_acf

use ar_acf::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    for phi in [0.8, -0.8] {
        let spec = Ar1Spec::new(phi, 100);
        let mut rng = StdRng::seed_from_u64(42);
        let series = simulate_ar1(&spec, &mut rng)?;
        let result = acf(&series, 20)?;

        println!("phi = {phi:+.1}");
        for (lag, estimate) in result.pairs() {
            let bar = "#".repeat((estimate.abs() * 40.0).round() as usize);
            println!("  lag {lag:>2}  {estimate:+.3}  {bar}");
        }
        println!();
    }
    Ok(())
}
