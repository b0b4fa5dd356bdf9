// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::Operand;
use crate::value::Value;
use num_traits::Float;

/// Multiplies two values: `a * b`.
///
/// The result has parents `[a, b]`; backward sends `grad * b` to `a` and `grad * a` to `b`.
pub fn mul_op<T: Float>(
    a: &Value<T>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, ScalarGradError> {
    let graph = a.graph();
    let b = b.into().into_value(graph, "mul")?;
    let data = a.data() * b.data();
    Ok(graph.push_node(data, Op::Mul, vec![a.id(), b.id()], None))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
