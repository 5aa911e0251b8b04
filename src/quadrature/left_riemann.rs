use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::quadrature::{Integrand, QuadratureConfig, QuadratureResult};

/// Approximates a definite integral with a fixed-step left-endpoint Riemann sum.
///
/// Samples `f` at `lower`, `lower + step`, `lower + 2*step`, ... for as long
/// as the cursor stays below `upper`, then scales the accumulated sum by
/// `step` once at the end. The cursor is advanced by repeated addition, so
/// the number of samples taken can differ from `config.node_count()` once
/// rounding error accumulates over long runs.
///
/// The integrand is evaluated wherever the cursor lands. Nothing guards
/// against poles: a sample at a point where `f` divides by zero turns the
/// whole sum into NaN under IEEE 754, and the NaN is returned rather than
/// reported as an error.
///
/// # Arguments
///
/// * `f` - The integrand to sample
/// * `config` - Interval bounds and step size
///
/// # Returns
///
/// Returns a `QuadratureResult` containing the integral approximation and
/// the number of samples taken.
///
/// # Examples
///
/// ```
/// use sincpi::quadrature::{Integrand, QuadratureConfig};
/// use sincpi::quadrature::left_riemann::integrate;
///
/// struct Identity;
///
/// impl Integrand<f64> for Identity {
///     fn evaluate(&self, x: f64) -> f64 {
///         x
///     }
/// }
///
/// let config = QuadratureConfig::new(0.0, 1.0, 0.0001).unwrap();
/// let result = integrate(&Identity, &config);
/// assert!((result.value - 0.5).abs() < 1e-3);
/// ```
pub fn integrate<T, F>(f: &F, config: &QuadratureConfig<T>) -> QuadratureResult<T>
where
    T: Float + Debug,
    F: Integrand<T>,
{
    debug!(
        "left Riemann sum over [{:?},{:?}] with step {:?}",
        config.lower, config.upper, config.step
    );

    let mut sum = T::zero();
    let mut x = config.lower;
    let mut steps = 0;

    while x < config.upper {
        sum = sum + f.evaluate(x);
        x = x + config.step;
        steps += 1;
    }

    QuadratureResult {
        value: sum * config.step,
        steps,
    }
}
