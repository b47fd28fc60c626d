use tracing::trace;
use twofloat::TwoFloat;

use crate::{Error, DEFAULT_PRECISION, MAX_PRECISION};

/// Refinements allowed before giving up on reaching the limit.
pub const MAX_ITERATIONS: usize = 100;

/// Result of the Babylonian square root: the final guess and how many steps it took,
/// counting the initial guess as the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtApprox {
    pub root: TwoFloat,
    pub iterations: usize,
}

/// Rough estimate of `sqrt(radicand)`: `10^(digits / 2)` where `digits = ceil(log10(radicand))`.
pub fn initial_guess(radicand: f64) -> Result<f64, Error> {
    check_radicand(radicand)?;
    let digits = radicand.log10().ceil();
    Ok(10f64.powf(digits / 2.0))
}

/// Convergence limit `10^-precision` for `precision` in `0..=MAX_PRECISION`.
pub fn convergence_limit(precision: u32) -> Result<f64, Error> {
    if precision > MAX_PRECISION {
        return Err(Error::InvalidPrecision(precision));
    }

    let exp = i32::try_from(precision).map_err(|_| Error::InvalidPrecision(precision))?;
    Ok(10f64.powi(-exp))
}

/// Babylonian square root converged to `10^-15`.
pub fn sqrt_babylonian(radicand: f64) -> Result<SqrtApprox, Error> {
    sqrt_babylonian_to(radicand, DEFAULT_PRECISION)
}

/// Babylonian square root, refining `x = (x + S / x) / 2` until two successive guesses
/// differ by at most `10^-precision`. At least one refinement always runs.
///
/// Guesses are double-double (about 31 significant digits), so the limit is reachable for
/// every precision up to `MAX_PRECISION` at the magnitudes scanned here.
pub fn sqrt_babylonian_to(radicand: f64, precision: u32) -> Result<SqrtApprox, Error> {
    let limit = convergence_limit(precision)?;
    let target = TwoFloat::from(radicand);
    let mut guess = TwoFloat::from(initial_guess(radicand)?);
    let mut iterations = 1;

    loop {
        let previous = guess;
        guess = (guess + target / guess) * 0.5;
        iterations += 1;

        let step = (previous - guess).hi().abs();
        trace!(radicand, guess = guess.hi(), step, iterations, "Refined square root guess.");
        if step <= limit {
            break;
        }

        if iterations > MAX_ITERATIONS {
            return Err(Error::NotConverged { radicand, limit });
        }
    }

    Ok(SqrtApprox {
        root: guess,
        iterations,
    })
}

/// Reference square root of `radicand` in double-double precision: `f64::sqrt` plus one
/// correction `(S - s * s) / 2s`, with `s * s` taken exactly.
pub fn reference_sqrt(radicand: f64) -> Result<TwoFloat, Error> {
    check_radicand(radicand)?;
    let root = radicand.sqrt();
    let residual = TwoFloat::from(radicand) - TwoFloat::new_mul(root, root);
    Ok(residual / (2.0 * root) + root)
}

fn check_radicand(radicand: f64) -> Result<(), Error> {
    if radicand.is_finite() && radicand > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(radicand))
    }
}
