//! The function under study, `f(x) = x²`, and its derivatives.

use crate::dual::Dual;
use crate::float::Float;
use crate::scalar::Scalar;

/// `f(x) = x²`, generic so it runs on `f64` and on [`Dual`].
#[inline]
pub fn square<T: Scalar>(x: T) -> T {
    x * x
}

/// `f(x) = x²` on plain `f64`.
#[inline]
pub fn f(x: f64) -> f64 {
    square(x)
}

/// Closed-form derivative `f'(x) = 2x`.
#[inline]
pub fn df_analytic(x: f64) -> f64 {
    2.0 * x
}

/// Exact derivative of `func` at `x` by forward-mode propagation.
///
/// ```
/// let d = slopecheck::analytic_derivative_ad(|x| slopecheck::function::square(x), 1.5_f64);
/// assert_eq!(d, 3.0);
/// ```
pub fn analytic_derivative_ad<F: Float>(func: impl Fn(Dual<F>) -> Dual<F>, x: F) -> F {
    func(Dual::variable(x)).eps
}

/// Value and exact derivative in one pass.
pub fn value_and_derivative<F: Float>(func: impl Fn(Dual<F>) -> Dual<F>, x: F) -> (F, F) {
    let out = func(Dual::variable(x));
    (out.re, out.eps)
}
