/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Numerical integration and table helpers
//!
//! The integrators are fixed-step rules: accuracy is set entirely by the number
//! of subintervals the caller asks for. There is no adaptive refinement and no
//! error estimate, so results for a given `n` are reproducible run to run.

use super::errors::{Result, UtilsError};
use log::debug;

/// Number of subintervals Simpson's rule will actually use for a requested `n`
///
/// Simpson's rule needs an even number of subintervals. An odd request is
/// rounded up to the next even value rather than truncated, so the step size
/// never grows beyond what the caller asked for.
///
/// # Errors
///
/// Returns an error when `n` is zero.
pub fn simpson_intervals(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(UtilsError::Math(
            "Simpson's rule needs at least one subinterval".to_string(),
        ));
    }

    if n % 2 == 0 {
        Ok(n)
    } else {
        debug!("Rounding odd Simpson subinterval count {} up to {}", n, n + 1);
        Ok(n + 1)
    }
}

/// Performs numerical integration using the trapezoidal rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals
///
/// # Returns
///
/// The approximate value of the integral
pub fn integrate_trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b || n == 0 {
        return 0.0;
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));

    for i in 1..n {
        let x = a + i as f64 * h;
        sum += f(x);
    }

    sum * h
}

/// Performs numerical integration using Simpson's rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals (odd values are rounded up, see [`simpson_intervals`])
///
/// # Returns
///
/// The approximate value of the integral, or an error if `n` is zero or a
/// bound is not finite
pub fn integrate_simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(UtilsError::Math(format!(
            "Integration bounds must be finite, got [{}, {}]",
            a, b
        )));
    }

    let n = simpson_intervals(n)?;

    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let endpoints = f(a) + f(b);

    // Odd-indexed points carry weight 4
    let mut odd_sum = 0.0;
    for i in (1..n).step_by(2) {
        let x = a + i as f64 * h;
        odd_sum += f(x);
    }

    // Even-indexed interior points carry weight 2
    let mut even_sum = 0.0;
    for i in (2..n).step_by(2) {
        let x = a + i as f64 * h;
        even_sum += f(x);
    }

    Ok((endpoints + 4.0 * odd_sum + 2.0 * even_sum) * h / 3.0)
}

/// Index of the tabulated value closest to `x`
///
/// Ties resolve to the earliest index, so the result depends only on the
/// order the values were supplied in. Non-finite table entries never match.
///
/// # Returns
///
/// `None` if `values` is empty or holds no finite entry
pub fn nearest_index<I>(x: f64, values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;

    for (i, value) in values.into_iter().enumerate() {
        let diff = (x - value).abs();
        if !diff.is_finite() {
            continue;
        }
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((i, diff)),
        }
    }

    best.map(|(i, _)| i)
}
