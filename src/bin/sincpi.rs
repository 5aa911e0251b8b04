use std::io;

use sincpi::console::{run, StdinPause};
use sincpi::quadrature::QuadratureConfig;

const LOWER: f64 = -10000.0;
const UPPER: f64 = 10000.0;
const STEP: f64 = 0.00001;

fn main() {
    let config =
        QuadratureConfig::new(LOWER, UPPER, STEP).expect("interval constants are valid");

    let stdout = io::stdout();
    // Exit status stays 0 regardless of write failures.
    let _ = run(&config, &mut stdout.lock(), &mut StdinPause);
}
