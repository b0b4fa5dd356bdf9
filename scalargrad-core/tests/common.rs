use scalargrad_core::{Graph, Value};

// Helpers shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn leaves(graph: &Graph, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&d| graph.leaf(d)).collect()
}

/// Collects the gradients of `values` in order.
#[allow(dead_code)]
pub fn grads(values: &[Value]) -> Vec<f64> {
    values.iter().map(|v| v.grad()).collect()
}
