//! One-sided and symmetric finite-difference slope estimates.
//!
//! The generic forms take any `Fn(f64) -> f64`; the short names are fixed to
//! `f(x) = x²`. None of these guard `h = 0`: the division then yields a
//! non-finite value. Callers that take `h` from the outside go through
//! [`Settings::validate`](crate::Settings::validate) first.

use std::fmt;

use crate::function::f;

/// Which difference formula produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Forward,
    Backward,
    Central,
}

impl Method {
    /// Estimate the slope of `func` at `x0` with step `h`.
    pub fn estimate(self, func: impl Fn(f64) -> f64, x0: f64, h: f64) -> f64 {
        match self {
            Method::Forward => forward_diff_of(func, x0, h),
            Method::Backward => backward_diff_of(func, x0, h),
            Method::Central => central_diff_of(func, x0, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Forward => write!(f, "forward"),
            Method::Backward => write!(f, "backward"),
            Method::Central => write!(f, "central"),
        }
    }
}

/// Forward difference: `(f(x+h) - f(x)) / h`. Error is O(h).
#[inline]
pub fn forward_diff_of(func: impl Fn(f64) -> f64, x0: f64, h: f64) -> f64 {
    (func(x0 + h) - func(x0)) / h
}

/// Backward difference: `(f(x) - f(x-h)) / h`. Error is O(h).
#[inline]
pub fn backward_diff_of(func: impl Fn(f64) -> f64, x0: f64, h: f64) -> f64 {
    (func(x0) - func(x0 - h)) / h
}

/// Central difference: `(f(x+h) - f(x-h)) / 2h`. Error is O(h²), and zero
/// for polynomials of degree ≤ 2.
#[inline]
pub fn central_diff_of(func: impl Fn(f64) -> f64, x0: f64, h: f64) -> f64 {
    (func(x0 + h) - func(x0 - h)) / (2.0 * h)
}

/// Forward difference of `x²`. Equals `2·x0 + h`.
#[inline]
pub fn forward_diff(x0: f64, h: f64) -> f64 {
    forward_diff_of(f, x0, h)
}

/// Backward difference of `x²`. Equals `2·x0 - h`.
#[inline]
pub fn backward_diff(x0: f64, h: f64) -> f64 {
    backward_diff_of(f, x0, h)
}

/// Central difference of `x²`. Equals `2·x0`.
#[inline]
pub fn central_diff(x0: f64, h: f64) -> f64 {
    central_diff_of(f, x0, h)
}
