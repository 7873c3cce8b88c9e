use std::io::Write;

use slopecheck::{Settings, SlopeError};

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "x0 = 2.0\nh = 0.5\nsweep = [0.5, 0.25]\n\n[plot]\noutput = \"out.png\"\nsize = [800, 600]"
    )
    .unwrap();

    let s = Settings::load(file.path()).unwrap();
    assert_eq!(s.x0, 2.0);
    assert_eq!(s.h, 0.5);
    assert_eq!(s.sweep, vec![0.5, 0.25]);
    assert_eq!(s.plot.output.to_str(), Some("out.png"));
    assert_eq!(s.plot.size, (800, 600));
    assert_eq!(s.plot.y_range, (0.0, 16.0));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, SlopeError::Io(_)));
}

#[test]
fn non_finite_point_rejected() {
    let s = Settings {
        x0: f64::NAN,
        ..Settings::default()
    };
    assert!(matches!(s.validate(), Err(SlopeError::InvalidPoint(_))));
}

#[test]
fn error_messages_name_the_value() {
    let err = Settings::from_toml_str("h = 0.0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid step size h = 0: must be finite and non-zero"
    );
}

#[test]
fn zero_canvas_dimension_rejected() {
    let err = Settings::from_toml_str("[plot]\nsize = [0, 0]").unwrap_err();
    assert!(matches!(
        err,
        SlopeError::InvalidCanvas {
            width: 0,
            height: 0
        }
    ));
}

#[test]
fn flat_or_inverted_y_range_rejected() {
    for text in ["[plot]\ny_range = [16.0, 16.0]", "[plot]\ny_range = [16.0, 0.0]"] {
        let err = Settings::from_toml_str(text).unwrap_err();
        assert!(matches!(err, SlopeError::InvalidYRange { .. }), "{text}");
    }
}

#[test]
fn non_finite_y_range_rejected() {
    let mut s = Settings::default();
    s.plot.y_range = (0.0, f64::INFINITY);
    assert!(matches!(s.validate(), Err(SlopeError::InvalidYRange { .. })));
}
