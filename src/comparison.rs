use std::fmt;

use crate::finite_diff::Method;
use crate::function::{df_analytic, f};
use crate::sampling::tangent_line;

/// One finite-difference slope and its signed error against the true slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub method: Method,
    pub slope: f64,
    /// `slope - true_slope`.
    pub error: f64,
}

impl Estimate {
    /// Apply `method` to `x²` at `x0` and score it against `true_slope`.
    pub fn measure(method: Method, x0: f64, h: f64, true_slope: f64) -> Self {
        let slope = method.estimate(f, x0, h);
        tracing::debug!(%method, x0, h, slope, error = slope - true_slope, "estimate");
        Estimate {
            method,
            slope,
            error: slope - true_slope,
        }
    }
}

/// Analytic, forward and central slopes of `x²` at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub x0: f64,
    pub h: f64,
    /// `f(x0)`, the point every tangent passes through.
    pub y0: f64,
    pub true_slope: f64,
    pub forward: Estimate,
    pub central: Estimate,
}

/// Compute all three slopes at `x0` with step `h`.
///
/// `h` is not checked here; `h = 0` gives NaN estimates.
pub fn compare(x0: f64, h: f64) -> Comparison {
    let true_slope = df_analytic(x0);
    let forward = Estimate::measure(Method::Forward, x0, h, true_slope);
    let central = Estimate::measure(Method::Central, x0, h, true_slope);
    Comparison {
        x0,
        h,
        y0: f(x0),
        true_slope,
        forward,
        central,
    }
}

/// Sampled tangent lines for each slope variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Tangents {
    pub true_line: Vec<f64>,
    pub forward: Vec<f64>,
    pub central: Vec<f64>,
}

impl Comparison {
    /// Sample the three tangents over `xs`.
    pub fn tangents(&self, xs: &[f64]) -> Tangents {
        Tangents {
            true_line: tangent_line(self.true_slope, self.x0, self.y0, xs),
            forward: tangent_line(self.forward.slope, self.x0, self.y0, xs),
            central: tangent_line(self.central.slope, self.x0, self.y0, xs),
        }
    }

    /// The points the estimates sampled: `(x0, f(x0))`, `(x0+h, f(x0+h))`, `(x0-h, f(x0-h))`.
    pub fn stencil_points(&self) -> [(f64, f64); 3] {
        let right = self.x0 + self.h;
        let left = self.x0 - self.h;
        [(self.x0, self.y0), (right, f(right)), (left, f(left))]
    }
}

const RULE: &str = "----------------------------------------";

impl fmt::Display for Comparison {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "Function: y = x^2,  point x = {:?},  step h = {:?}",
            self.x0, self.h
        )?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "1. Analytic derivative   : Slope = {:.4}", self.true_slope)?;
        writeln!(
            out,
            "2. Forward diff (blue)   : Slope = {:.4}  (error: {:.4})",
            self.forward.slope, self.forward.error
        )?;
        writeln!(
            out,
            "3. Central diff (green)  : Slope = {:.4}  (error: {:.4})",
            self.central.slope, self.central.error
        )?;
        writeln!(out, "{RULE}")?;
        write!(
            out,
            "Note: for a quadratic the central-difference error is exactly 0, so it matches the analytic slope."
        )
    }
}
