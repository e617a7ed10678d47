use super::*;

#[test]
fn fill_percent_spans_track() {
    assert!((fill_percent(1, 1, 10) - 0.0).abs() < f64::EPSILON);
    assert!((fill_percent(10, 1, 10) - 100.0).abs() < f64::EPSILON);
    assert!((fill_percent(3, 1, 5) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn fill_percent_clamps_out_of_range_values() {
    assert!((fill_percent(0, 1, 5) - 0.0).abs() < f64::EPSILON);
    assert!((fill_percent(99, 1, 5) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn fill_percent_handles_degenerate_range() {
    assert!((fill_percent(4, 4, 4) - 100.0).abs() < f64::EPSILON);
}
