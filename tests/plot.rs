use approx::assert_relative_eq;
use slopecheck::plot::LineDash;
use slopecheck::{compare, f, linspace, render, ChartSpec, Comparison, SlopeError};

fn reference_spec() -> ChartSpec {
    let xs = linspace(0.0, 4.0, 100);
    ChartSpec::build(&compare(1.5, 1.0), &xs, (0.0, 16.0)).unwrap()
}

fn assert_collinear(points: &[(f64, f64)], cmp: &Comparison, slope: f64) {
    assert!(points.len() >= 2);
    for &(x, y) in points {
        assert_relative_eq!(
            y,
            slope * (x - cmp.x0) + cmp.y0,
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn spec_layout() {
    let spec = reference_spec();
    assert_eq!(spec.x_range, (0.0, 4.0));
    assert_eq!(spec.y_range, (0.0, 16.0));
    // curve + 3 tangents + 3 guides
    assert_eq!(spec.lines.len(), 7);
    assert_eq!(spec.markers.len(), 3);
    assert_eq!(spec.lines[3].dash, LineDash::Dashed);
    assert!(spec.lines[4..].iter().all(|l| l.dash == LineDash::Dotted));
    assert!(spec.lines[4..].iter().all(|l| l.label.is_none()));
}

#[test]
fn curve_samples_the_function() {
    let spec = reference_spec();
    let curve = &spec.lines[0];
    assert_eq!(curve.points.len(), 100);
    for &(x, y) in &curve.points {
        assert_relative_eq!(y, f(x));
    }
}

#[test]
fn guides_run_from_axis_to_markers() {
    let spec = reference_spec();
    for (guide, marker) in spec.lines[4..].iter().zip(&spec.markers) {
        assert_eq!(guide.points, vec![(marker.at.0, 0.0), marker.at]);
    }
}

#[test]
fn every_line_stays_inside_y_window() {
    for &(x0, h) in &[(1.5, 1.0), (2.0, 0.5), (3.7, 2.0), (0.2, 1.5)] {
        let cmp = compare(x0, h);
        let spec = ChartSpec::build(&cmp, &linspace(0.0, 4.0, 100), (0.0, 16.0)).unwrap();
        let (lo, hi) = spec.y_range;
        for line in &spec.lines {
            for &(_, y) in &line.points {
                assert!(lo <= y && y <= hi, "y = {y} outside [{lo}, {hi}] for x0={x0}, h={h}");
            }
        }
    }
}

#[test]
fn clipped_tangents_keep_their_slopes() {
    for &(x0, h) in &[(1.5, 1.0), (3.7, 2.0)] {
        let cmp = compare(x0, h);
        let spec = ChartSpec::build(&cmp, &linspace(0.0, 4.0, 100), (0.0, 16.0)).unwrap();
        let label = |i: usize| spec.lines[i].label.as_deref().unwrap_or("");
        assert!(label(1).starts_with("Forward"));
        assert!(label(2).starts_with("True"));
        assert!(label(3).starts_with("Central"));
        assert_collinear(&spec.lines[1].points, &cmp, cmp.forward.slope);
        assert_collinear(&spec.lines[2].points, &cmp, cmp.true_slope);
        assert_collinear(&spec.lines[3].points, &cmp, cmp.central.slope);
    }
}

#[test]
fn forward_tangent_starts_where_it_crosses_the_axis() {
    let spec = reference_spec();
    // 4·(x - 1.5) + 2.25 = 0 at x = 0.9375
    let (x, y) = spec.lines[1].points[0];
    assert_relative_eq!(x, 0.9375, max_relative = 1e-12);
    assert!(y.abs() < 1e-12);
}

#[test]
fn stencil_points_outside_domain_are_dropped() {
    // x0 + h = 5.7 lies right of the domain
    let cmp = compare(3.7, 2.0);
    let spec = ChartSpec::build(&cmp, &linspace(0.0, 4.0, 100), (0.0, 16.0)).unwrap();
    assert_eq!(spec.markers.len(), 2);
    assert!(spec.markers.iter().all(|m| m.at.0 <= 4.0));
    let guides = spec.lines.iter().filter(|l| l.dash == LineDash::Dotted).count();
    assert_eq!(guides, 2);
}

#[test]
fn exact_central_is_flagged_at_large_x() {
    let cmp = compare(1000.3, 0.7);
    let spec = ChartSpec::build(&cmp, &linspace(999.0, 1001.0, 50), (0.0, 2.0e6)).unwrap();
    let central = spec
        .lines
        .iter()
        .filter_map(|l| l.label.as_deref())
        .find(|l| l.starts_with("Central"))
        .unwrap();
    assert!(central.ends_with("(Matches True!)"), "{central}");
}

#[test]
fn svg_chart_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    match render(&reference_spec(), &path, (640, 480)) {
        Ok(()) => {
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.contains("<svg"));
            assert!(text.contains("Visualizing Numerical Differentiation"));
        }
        // hosts without any system font cannot lay out text
        Err(SlopeError::Plot(msg)) if msg.to_lowercase().contains("font") => {
            eprintln!("skipping svg check: {msg}")
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}
