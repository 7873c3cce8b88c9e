use thiserror::Error;

/// Unified error type for the slopecheck crate.
#[derive(Debug, Error)]
pub enum SlopeError {
    /// Step size that the difference formulas cannot divide by.
    #[error("invalid step size h = {0}: must be finite and non-zero")]
    InvalidStep(f64),
    /// Target point that is NaN or infinite.
    #[error("invalid target point x0 = {0}: must be finite")]
    InvalidPoint(f64),
    /// Plot domain with `start >= end` or non-finite bounds.
    #[error("invalid domain [{start}, {end}]")]
    InvalidDomain { start: f64, end: f64 },
    /// Vertical plot window that is empty, inverted or non-finite.
    #[error("invalid y range [{lo}, {hi}]")]
    InvalidYRange { lo: f64, hi: f64 },
    /// Chart canvas with a zero dimension.
    #[error("invalid chart size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    /// Fewer samples than needed to draw a curve.
    #[error("invalid sample count {0}: need at least 2")]
    InvalidSamples(usize),
    /// Wrapper around I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Chart backend or layout failure.
    #[error("plot error: {0}")]
    Plot(String),
}

impl SlopeError {
    pub fn plot<T: ToString>(err: T) -> Self {
        Self::Plot(err.to_string())
    }
}

pub type Result<T, E = SlopeError> = std::result::Result<T, E>;
