use crate::value::Value;

/// Panics unless `actual` is within `tolerance` of `expected`.
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks data and grad of a node at once.
pub(crate) fn check_value_near(
    value: &Value<f64>,
    expected_data: f64,
    expected_grad: f64,
    tolerance: f64,
) {
    assert_close(value.data(), expected_data, tolerance);
    assert_close(value.grad(), expected_grad, tolerance);
}

/// Panics if `value` recorded a gradient.
pub(crate) fn assert_untouched(value: &Value<f64>) {
    assert_eq!(value.grad(), 0.0, "expected no gradient on {:?}", value);
}
