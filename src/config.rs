use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlopeError};

const fn default_x0() -> f64 {
    1.5
}

// Forward-difference error on x² equals h, so 1.0 shows up clearly on the chart.
const fn default_h() -> f64 {
    1.0
}

/// Sampled interval for the curve and tangent lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
    #[serde(default = "Domain::default_samples")]
    pub samples: usize,
}

impl Domain {
    const fn default_samples() -> usize {
        100
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 4.0,
            samples: Self::default_samples(),
        }
    }
}

/// Chart options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_output")]
    pub output: PathBuf,
    #[serde(default = "PlotConfig::default_size")]
    pub size: (u32, u32),
    #[serde(default = "PlotConfig::default_y_range")]
    pub y_range: (f64, f64),
}

impl PlotConfig {
    fn default_output() -> PathBuf {
        PathBuf::from("derivatives.svg")
    }
    const fn default_size() -> (u32, u32) {
        (1000, 800)
    }
    const fn default_y_range() -> (f64, f64) {
        (0.0, 16.0)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: Self::default_output(),
            size: Self::default_size(),
            y_range: Self::default_y_range(),
        }
    }
}

/// Everything a run needs. Defaults reproduce `x0 = 1.5`, `h = 1.0` over `[0, 4]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_x0")]
    pub x0: f64,
    #[serde(default = "default_h")]
    pub h: f64,
    #[serde(default)]
    pub domain: Domain,
    #[serde(default)]
    pub plot: PlotConfig,
    /// Step sizes for the error sweep; empty disables it.
    #[serde(default)]
    pub sweep: Vec<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x0: default_x0(),
            h: default_h(),
            domain: Domain::default(),
            plot: PlotConfig::default(),
            sweep: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject inputs the difference formulas or the sampler cannot handle.
    pub fn validate(&self) -> Result<()> {
        if !self.x0.is_finite() {
            return Err(SlopeError::InvalidPoint(self.x0));
        }
        check_step(self.h)?;
        for &h in &self.sweep {
            check_step(h)?;
        }
        let Domain {
            start,
            end,
            samples,
        } = self.domain;
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(SlopeError::InvalidDomain { start, end });
        }
        if samples < 2 {
            return Err(SlopeError::InvalidSamples(samples));
        }
        let (width, height) = self.plot.size;
        if width == 0 || height == 0 {
            return Err(SlopeError::InvalidCanvas { width, height });
        }
        let (lo, hi) = self.plot.y_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(SlopeError::InvalidYRange { lo, hi });
        }
        Ok(())
    }
}

fn check_step(h: f64) -> Result<()> {
    if h == 0.0 || !h.is_finite() {
        return Err(SlopeError::InvalidStep(h));
    }
    Ok(())
}
