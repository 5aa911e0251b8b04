use std::f64::consts::PI;
use std::io::{self, Read, Write};

use crate::quadrature::{left_riemann_integrate, QuadratureConfig};
use crate::special::Sinc;

/// Blocks until the user acts, pacing the run before the heavy loop starts.
pub trait Pause {
    /// Waits for the user. Whatever input arrives is discarded.
    fn wait(&mut self);
}

/// Waits for a single byte on standard input.
pub struct StdinPause;

impl Pause for StdinPause {
    fn wait(&mut self) {
        let mut byte = [0u8; 1];
        // A failed read has nowhere to go: the run has no failure path.
        let _ = io::stdin().lock().read(&mut byte);
    }
}

/// Runs the full console interaction: announce the configuration, wait for
/// the user, integrate sinc over the configured interval and report the
/// result next to π.
///
/// Writes exactly six lines to `out`, in order: the interval, the step
/// size, the node count, the keypress prompt (after which `pause` blocks),
/// the accumulated sum and its absolute discrepancy from π. Floating-point
/// values are printed with six decimal places.
///
/// # Arguments
///
/// * `config` - Interval bounds and step size for the run
/// * `out` - Destination for the six report lines
/// * `pause` - Collaborator that blocks between the prompt and the summation
///
/// # Returns
///
/// Returns the absolute discrepancy `|sum - π|`.
pub fn run<W, P>(config: &QuadratureConfig<f64>, out: &mut W, pause: &mut P) -> io::Result<f64>
where
    W: Write,
    P: Pause,
{
    writeln!(out, "Intervallo [{:.6},{:.6}]", config.lower, config.upper)?;
    writeln!(out, "Passo={:.6}", config.step)?;
    writeln!(out, "Numero punti={}", config.node_count())?;
    writeln!(out, "Premere <invio> ...")?;
    pause.wait();

    let result = left_riemann_integrate(&Sinc, config);
    let scarto = (result.value - PI).abs();

    writeln!(out, "sum={:.6}", result.value)?;
    writeln!(out, "scarto={:.6}", scarto)?;

    Ok(scarto)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingPause {
        calls: usize,
    }

    impl Pause for CountingPause {
        fn wait(&mut self) {
            self.calls += 1;
        }
    }

    fn small_config() -> QuadratureConfig<f64> {
        // Off-grid lower bound keeps every sample away from zero.
        QuadratureConfig::new(-10.0005, 10.0, 0.001).unwrap()
    }

    #[test]
    fn test_run_prints_six_lines_in_order() {
        let mut out = Vec::new();
        let mut pause = CountingPause { calls: 0 };

        run(&small_config(), &mut out, &mut pause).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Intervallo [-10.000500,10.000000]");
        assert_eq!(lines[1], "Passo=0.001000");
        assert_eq!(lines[2], "Numero punti=20000");
        assert_eq!(lines[3], "Premere <invio> ...");
        assert!(lines[4].starts_with("sum="));
        assert!(lines[5].starts_with("scarto="));
    }

    #[test]
    fn test_run_waits_exactly_once() {
        let mut out = Vec::new();
        let mut pause = CountingPause { calls: 0 };

        run(&small_config(), &mut out, &mut pause).unwrap();

        assert_eq!(pause.calls, 1);
    }

    #[test]
    fn test_run_discrepancy_is_finite_and_non_negative() {
        let mut out = Vec::new();
        let mut pause = CountingPause { calls: 0 };

        let scarto = run(&small_config(), &mut out, &mut pause).unwrap();

        assert!(scarto.is_finite());
        assert!(scarto >= 0.0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut pause = CountingPause { calls: 0 };

        run(&small_config(), &mut first, &mut pause).unwrap();
        run(&small_config(), &mut second, &mut pause).unwrap();

        assert_eq!(first, second);
    }
}
