//! Chart of `x²` with its analytic and finite-difference tangents.
//!
//! Building the chart is split from drawing it: [`ChartSpec::build`] turns a
//! [`Comparison`] into plain series data, and [`render`] hands that to a
//! plotters backend chosen by file extension (`.png` bitmap, anything else SVG).

use std::ffi::OsStr;
use std::path::Path;

use approx::relative_eq;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::comparison::Comparison;
use crate::error::{Result, SlopeError};
use crate::function::f;
use crate::sampling::sample;

const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
}

/// One polyline on the chart. Lines without a label stay out of the legend.
#[derive(Clone)]
pub struct LineSpec {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub alpha: f64,
    pub width: u32,
    pub dash: LineDash,
}

/// A filled circle marking a sampled point.
#[derive(Clone, Copy)]
pub struct Marker {
    pub at: (f64, f64),
    pub color: RGBColor,
    pub radius: u32,
}

/// Everything needed to draw the chart, independent of backend.
#[derive(Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub lines: Vec<LineSpec>,
    pub markers: Vec<Marker>,
}

impl ChartSpec {
    /// Lay out the curve, the three tangents, the stencil points and their
    /// vertical guides over the grid `xs`.
    ///
    /// Lines are clipped to `y_range` and split where they leave it; only the
    /// first piece of a labelled line carries the label. Stencil points that
    /// fall outside the window are dropped together with their guides.
    pub fn build(cmp: &Comparison, xs: &[f64], y_range: (f64, f64)) -> Result<Self> {
        let (&x_first, &x_last) = match (xs.first(), xs.last()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(SlopeError::InvalidSamples(xs.len())),
        };
        let (y_lo, y_hi) = y_range;
        if !y_lo.is_finite() || !y_hi.is_finite() || y_lo >= y_hi {
            return Err(SlopeError::InvalidYRange { lo: y_lo, hi: y_hi });
        }
        let zip = |ys: Vec<f64>| -> Vec<(f64, f64)> { xs.iter().copied().zip(ys).collect() };
        let tangents = cmp.tangents(xs);

        let central_label = if relative_eq!(
            cmp.central.slope,
            cmp.true_slope,
            epsilon = 1e-12,
            max_relative = 1e-12
        ) {
            format!(
                "Central Diff (h={:?}): Slope={:.2} (Matches True!)",
                cmp.h, cmp.central.slope
            )
        } else {
            format!("Central Diff (h={:?}): Slope={:.2}", cmp.h, cmp.central.slope)
        };

        let curves = [
            LineSpec {
                label: Some("Function: y=x^2".to_string()),
                points: zip(sample(f, xs)),
                color: BLACK,
                alpha: 1.0,
                width: 2,
                dash: LineDash::Solid,
            },
            LineSpec {
                label: Some(format!(
                    "Forward Diff (h={:?}): Slope={:.2}",
                    cmp.h, cmp.forward.slope
                )),
                points: zip(tangents.forward),
                color: BLUE,
                alpha: 0.6,
                width: 2,
                dash: LineDash::Solid,
            },
            // wide and faint so the central tangent shows on top of it
            LineSpec {
                label: Some(format!("True Tangent: Slope={:.2}", cmp.true_slope)),
                points: zip(tangents.true_line),
                color: RED,
                alpha: 0.3,
                width: 8,
                dash: LineDash::Solid,
            },
            LineSpec {
                label: Some(central_label),
                points: zip(tangents.central),
                color: GREEN,
                alpha: 1.0,
                width: 2,
                dash: LineDash::Dashed,
            },
        ];

        let mut lines = Vec::new();
        for line in curves {
            push_clipped(&mut lines, line, y_range);
        }

        let [center, right, left] = cmp.stencil_points();
        let stencil = [
            (center, RED, 7, GRAY, 1.0),
            (right, BLUE, 5, BLUE, 0.5),
            (left, GREEN, 5, GREEN, 0.5),
        ];
        let in_window = |(x, y): (f64, f64)| x_first <= x && x <= x_last && y_lo <= y && y <= y_hi;

        let mut markers = Vec::new();
        for (point, color, radius, guide_color, guide_alpha) in stencil {
            if !in_window(point) {
                continue;
            }
            markers.push(Marker {
                at: point,
                color,
                radius,
            });
            let guide = LineSpec {
                label: None,
                points: vec![(point.0, 0.0), point],
                color: guide_color,
                alpha: guide_alpha,
                width: 1,
                dash: LineDash::Dotted,
            };
            push_clipped(&mut lines, guide, y_range);
        }

        Ok(ChartSpec {
            title: format!(
                "Visualizing Numerical Differentiation (x={:?}, h={:?})",
                cmp.x0, cmp.h
            ),
            x_range: (x_first, x_last),
            y_range,
            lines,
            markers,
        })
    }
}

/// Clip `line` to the band `lo <= y <= hi` and push one [`LineSpec`] per
/// visible piece.
fn push_clipped(lines: &mut Vec<LineSpec>, line: LineSpec, (lo, hi): (f64, f64)) {
    let mut label = line.label.clone();
    for points in clip_to_band(&line.points, lo, hi) {
        lines.push(LineSpec {
            label: label.take(),
            points,
            ..line.clone()
        });
    }
}

/// Split a polyline into the runs that lie inside `lo <= y <= hi`.
///
/// Each segment is cut at its crossings with the band edges, so a straight
/// line stays straight and every emitted point is inside the band. An empty
/// or inverted band yields no runs.
pub fn clip_to_band(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    if !(lo < hi) {
        return runs;
    }
    let mut run: Vec<(f64, f64)> = Vec::new();
    // whether the previous segment reached its end point inside the band
    let mut open = false;

    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let dy = b.1 - a.1;
        let (t0, t1) = if dy == 0.0 {
            if lo <= a.1 && a.1 <= hi {
                (0.0, 1.0)
            } else {
                (1.0, 0.0)
            }
        } else {
            let (ta, tb) = ((lo - a.1) / dy, (hi - a.1) / dy);
            (ta.min(tb).max(0.0), ta.max(tb).min(1.0))
        };
        if !(t0 <= t1) {
            open = false;
            continue;
        }
        let at = |t: f64| -> (f64, f64) {
            if t == 0.0 {
                a
            } else if t == 1.0 {
                b
            } else {
                (a.0 + t * (b.0 - a.0), (a.1 + t * dy).clamp(lo, hi))
            }
        };
        if !(open && t0 == 0.0) {
            if run.len() >= 2 {
                runs.push(std::mem::take(&mut run));
            }
            run.clear();
            run.push(at(t0));
        }
        run.push(at(t1));
        open = t1 == 1.0;
    }
    if run.len() >= 2 {
        runs.push(run);
    }
    runs
}

/// Draw `spec` into `path`.
pub fn render(spec: &ChartSpec, path: &Path, size: (u32, u32)) -> Result<()> {
    tracing::info!(path = %path.display(), width = size.0, height = size.1, "rendering chart");
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => {
            draw(BitMapBackend::new(path, size).into_drawing_area(), spec)
        }
        _ => draw(SVGBackend::new(path, size).into_drawing_area(), spec),
    }
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<()> {
    root.fill(&WHITE).map_err(SlopeError::plot)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            spec.x_range.0..spec.x_range.1,
            spec.y_range.0..spec.y_range.1,
        )
        .map_err(SlopeError::plot)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(SlopeError::plot)?;

    for line in &spec.lines {
        let style = line.color.mix(line.alpha).stroke_width(line.width);
        let points = line.points.iter().copied();
        let anno = match line.dash {
            LineDash::Solid => chart.draw_series(LineSeries::new(points, style)),
            LineDash::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 6, style)),
            LineDash::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 4, style)),
        }
        .map_err(SlopeError::plot)?;
        if let Some(label) = &line.label {
            anno.label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    chart
        .draw_series(
            spec.markers
                .iter()
                .map(|m| Circle::new(m.at, m.radius, m.color.filled())),
        )
        .map_err(SlopeError::plot)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(SlopeError::plot)?;

    root.present().map_err(SlopeError::plot)?;
    Ok(())
}
