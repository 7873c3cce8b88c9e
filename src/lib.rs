pub mod comparison;
pub mod config;
pub mod dual;
pub mod error;
pub mod finite_diff;
pub mod float;
pub mod function;
pub mod plot;
pub mod sampling;
pub mod scalar;
pub mod sweep;
mod traits;

pub use comparison::{compare, Comparison, Estimate, Tangents};
pub use config::{Domain, PlotConfig, Settings};
pub use dual::Dual;
pub use error::{Result, SlopeError};
pub use finite_diff::{backward_diff, central_diff, forward_diff, Method};
pub use float::Float;
pub use function::{analytic_derivative_ad, df_analytic, f};
pub use plot::{render, ChartSpec};
pub use sampling::{linspace, tangent_line, x_range};
pub use scalar::Scalar;
pub use sweep::{step_sweep, SweepRow};

/// Type alias for forward-mode dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
