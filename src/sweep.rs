//! Error of each difference formula as the step size shrinks.

use std::fmt;

use crate::finite_diff::{backward_diff, central_diff, forward_diff, Method};
use crate::function::df_analytic;

/// Signed errors at one step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub h: f64,
    pub forward_error: f64,
    pub backward_error: f64,
    pub central_error: f64,
}

/// Errors at `x0` for every step in `steps`, in the given order.
pub fn step_sweep(x0: f64, steps: &[f64]) -> Vec<SweepRow> {
    let true_slope = df_analytic(x0);
    steps
        .iter()
        .map(|&h| SweepRow {
            h,
            forward_error: forward_diff(x0, h) - true_slope,
            backward_error: backward_diff(x0, h) - true_slope,
            central_error: central_diff(x0, h) - true_slope,
        })
        .collect()
}

/// Halving sequence `start, start/2, ...` with `count` entries.
pub fn halving_steps(start: f64, count: usize) -> Vec<f64> {
    std::iter::successors(Some(start), |h| Some(h / 2.0))
        .take(count)
        .collect()
}

/// Fixed-width table view of a sweep.
pub struct SweepTable<'a>(pub &'a [SweepRow]);

impl fmt::Display for SweepTable<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = |m: Method| format!("{m} err");
        writeln!(
            out,
            "{:>12}  {:>14}  {:>14}  {:>14}",
            "h",
            header(Method::Forward),
            header(Method::Backward),
            header(Method::Central)
        )?;
        for row in self.0 {
            writeln!(
                out,
                "{:>12.6}  {:>14.6e}  {:>14.6e}  {:>14.6e}",
                row.h, row.forward_error, row.backward_error, row.central_error
            )?;
        }
        Ok(())
    }
}
