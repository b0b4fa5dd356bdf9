use super::*;
use crate::graph::Graph;
use crate::utils::testing::assert_close;
use approx::assert_relative_eq;

#[test]
fn test_pow_power_rule() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = pow_op(&x, 3)?;
    y.backward()?;
    assert_eq!(y.data(), 8.0);
    assert_eq!(x.grad(), 12.0);
    assert_eq!(y.op(), Op::Pow { exponent: 3.0 });
    Ok(())
}

#[test]
fn test_pow_fractional_exponent() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(4.0);
    let y = pow_op(&x, 0.5)?;
    y.backward()?;
    assert_relative_eq!(y.data(), 2.0);
    assert_relative_eq!(x.grad(), 0.25);
    Ok(())
}

#[test]
fn test_pow_negative_base_integer_exponent() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(-2.0);
    let y = x.powi(3);
    y.backward()?;
    assert_eq!(y.data(), -8.0);
    assert_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_rejects_node_exponent_without_building() {
    let graph: Graph = Graph::new();
    let x = graph.leaf(2.0);
    let n = graph.leaf(3.0);
    let before = graph.len();
    let err = pow_op(&x, &n).unwrap_err();
    assert_eq!(err, ScalarGradError::InvalidExponentType { node: n.id() });
    assert_eq!(graph.len(), before);
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_pow_zero_base_negative_exponent_is_infinite() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = x.pow(-1)?;
    assert_eq!(y.data(), f64::INFINITY);
    y.backward()?;
    // -1 * 0^-2
    assert_eq!(x.grad(), f64::NEG_INFINITY);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(-8.0);
    let y = x.powf(1.0 / 3.0);
    assert!(y.data().is_nan());
    y.backward()?;
    assert!(x.grad().is_nan());
    Ok(())
}

#[test]
fn test_pow_zero_exponent() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(5.0);
    let y = x.powi(0);
    y.backward()?;
    assert_eq!(y.data(), 1.0);
    assert_close(x.grad(), 0.0, 0.0);
    Ok(())
}
