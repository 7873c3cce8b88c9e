use std::fmt::{self, Display};

use crate::Float;

/// Forward-mode dual number: a value paired with its tangent (derivative).
///
/// `Dual { re, eps }` represents `re + eps·ε` where `ε² = 0`. Evaluating a
/// function on `Dual::variable(x)` yields `f(x)` in `re` and the exact
/// derivative `f'(x)` in `eps`, with no step size involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<F: Float> {
    /// Primal (real) value.
    pub re: F,
    /// Tangent (derivative) value.
    pub eps: F,
}

impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.eps)
    }
}

impl<F: Float> Dual<F> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: F, eps: F) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(re: F) -> Self {
        Dual { re, eps: F::zero() }
    }

    /// Create a variable (unit derivative) for differentiation.
    #[inline]
    pub fn variable(re: F) -> Self {
        Dual { re, eps: F::one() }
    }

    #[inline]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual {
            re: f_val,
            eps: self.eps * f_deriv,
        }
    }

    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let val = self.re.powi(n);
        let deriv = F::from(n).unwrap() * self.re.powi(n - 1);
        self.chain(val, deriv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powi_two_gives_twice_the_value() {
        let d = Dual::variable(1.5_f64).powi(2);
        assert_eq!(d.re, 2.25);
        assert_eq!(d.eps, 3.0);
    }

    #[test]
    fn constant_has_no_tangent() {
        let d = Dual::constant(7.0_f64).powi(3);
        assert_eq!(d.eps, 0.0);
    }

    #[test]
    fn display_shows_both_parts() {
        assert_eq!(Dual::new(2.0_f64, 4.0).to_string(), "2 + 4ε");
    }
}
