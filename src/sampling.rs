//! Evenly spaced grids and tangent-line samples for plotting.

use crate::config::Domain;

/// `n` evenly spaced points from `start` to `end`, both inclusive.
///
/// `n == 0` gives an empty grid and `n == 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // pin the endpoint so rounding never leaves it short
            xs[n - 1] = end;
            xs
        }
    }
}

/// The plotting grid for a [`Domain`].
pub fn x_range(domain: &Domain) -> Vec<f64> {
    linspace(domain.start, domain.end, domain.samples)
}

/// `y = slope·(x - x0) + y0` at each `x`.
pub fn tangent_line(slope: f64, x0: f64, y0: f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| slope * (x - x0) + y0).collect()
}

/// Apply `func` to every grid point.
pub fn sample(func: impl Fn(f64) -> f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| func(x)).collect()
}
