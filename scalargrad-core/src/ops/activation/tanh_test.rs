use super::*;
use crate::graph::Graph;
use crate::utils::testing::assert_close;
use approx::assert_relative_eq;

#[test]
fn test_tanh_at_zero() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = tanh_op(&x)?;
    y.backward()?;
    assert_eq!(y.data(), 0.0);
    assert_eq!(x.grad(), 1.0);
    Ok(())
}

#[test]
fn test_tanh_matches_exponential_form() {
    let graph: Graph = Graph::new();
    for &v in &[-3.0, -0.5, 0.1, 0.8813735870195432, 2.0] {
        let x = graph.leaf(v);
        let e = (2.0 * v as f64).exp();
        assert_relative_eq!(x.tanh().data(), (e - 1.0) / (e + 1.0), epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_backward_uses_output() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    // tanh(0.8813735870195432) == 0.7071067811865476
    let x = graph.leaf(0.8813735870195432);
    let y = x.tanh();
    y.backward()?;
    assert_close(y.data(), 0.7071067811865476, 1e-12);
    assert_close(x.grad(), 0.5, 1e-12);
    assert_eq!(y.op(), Op::Tanh { output: y.data() });
    Ok(())
}

#[test]
fn test_tanh_saturates_for_large_inputs() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.leaf(1000.0);
    let y = x.tanh();
    y.backward()?;
    assert_eq!(y.data(), 1.0);
    assert_eq!(x.grad(), 0.0);
    Ok(())
}

#[test]
fn test_tanh_neuron() -> Result<(), ScalarGradError> {
    // o = tanh(x1*w1 + x2*w2 + b)
    let graph: Graph = Graph::new();
    let x1 = graph.named_leaf("x1", 2.0);
    let x2 = graph.named_leaf("x2", 0.0);
    let w1 = graph.named_leaf("w1", -3.0);
    let w2 = graph.named_leaf("w2", 1.0);
    let b = graph.named_leaf("b", 6.8813735870195432);
    let n = &x1 * &w1 + &x2 * &w2 + &b;
    let o = n.tanh();
    o.backward()?;
    assert_close(o.data(), 0.7071067811865476, 1e-12);
    assert_close(n.grad(), 0.5, 1e-12);
    assert_close(x1.grad(), -1.5, 1e-12);
    assert_close(w1.grad(), 1.0, 1e-12);
    assert_close(x2.grad(), 0.5, 1e-12);
    assert_close(w2.grad(), 0.0, 1e-12);
    Ok(())
}
