// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;

/// Hyperbolic tangent activation.
///
/// The forward output `t` is cached on the node so backward can apply `1 - t²` without
/// recomputing it. The tangent saturates to ±1 for large inputs instead of overflowing.
pub fn tanh_op<T: Float>(a: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    Ok(tanh_node(a))
}

pub(crate) fn tanh_node<T: Float>(a: &Value<T>) -> Value<T> {
    let output = a.data().tanh();
    a.graph()
        .push_node(output, Op::Tanh { output }, vec![a.id()], None)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
