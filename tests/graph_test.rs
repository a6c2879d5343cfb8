use glyphcalc::error::EvalError;
use glyphcalc::graph::{DEFAULT_RESOLUTION, Domain, sample, x_values};
use glyphcalc::history::History;
use glyphcalc::{Real, assert_approx_eq};

#[test]
fn test_parabola_over_default_domain() {
    let samples = sample("x^2", Domain::default(), DEFAULT_RESOLUTION, &History::new());
    assert_eq!(samples.len(), 101);
    assert_eq!(samples[0].x, -10.0);
    assert_eq!(samples[0].y, Ok(100.0));
    assert_eq!(samples[100].x, 10.0);
    assert_eq!(samples[100].y, Ok(100.0));
    for point in &samples {
        assert_approx_eq!(point.y.clone().unwrap(), point.x * point.x, 1e-9);
    }
}

#[test]
fn test_sampling_is_idempotent() {
    let history = History::new();
    for template in ["<sin>x", "x^3-2x+1", "1/x", "<sqrt>x", "2^x"] {
        let first = sample(template, Domain::default(), DEFAULT_RESOLUTION, &history);
        let second = sample(template, Domain::default(), DEFAULT_RESOLUTION, &history);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            match (&a.y, &b.y) {
                (Ok(ya), Ok(yb)) => assert_eq!(ya.to_bits(), yb.to_bits(), "{template} at {}", a.x),
                (ya, yb) => assert_eq!(ya, yb),
            }
        }
    }
}

#[test]
fn test_negative_domain_yields_nan_not_errors() {
    let samples = sample("<sqrt>x", Domain::new(-1.0, 1.0), 2, &History::new());
    assert!(samples[0].y.clone().unwrap().is_nan());
    assert_eq!(samples[1].y, Ok(0.0));
    assert_eq!(samples[2].y, Ok(1.0));
}

#[test]
fn test_broken_template_fails_at_every_point() {
    let samples = sample("x+", Domain::new(0.0, 1.0), 4, &History::new());
    assert_eq!(samples.len(), 5);
    assert!(samples.iter().all(|s| s.y == Err(EvalError::MissingOperand)));
}

#[test]
fn test_custom_domain_spacing() {
    let xs = x_values(Domain::new(0.0, 1.0), 4);
    assert_eq!(xs, [0.0, 0.25, 0.5, 0.75, 1.0]);
    let ys: Vec<Real> = sample("2x", Domain::new(0.0, 1.0), 4, &History::new())
        .into_iter()
        .map(|s| s.y.unwrap())
        .collect();
    assert_eq!(ys, [0.0, 0.5, 1.0, 1.5, 2.0]);
}
