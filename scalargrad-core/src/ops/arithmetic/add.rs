// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::Operand;
use crate::value::Value;
use num_traits::Float;

/// Adds two values: `a + b`.
///
/// The result has parents `[a, b]`; backward passes the output gradient unchanged to both.
pub fn add_op<T: Float>(
    a: &Value<T>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, ScalarGradError> {
    let graph = a.graph();
    let b = b.into().into_value(graph, "add")?;
    let data = a.data() + b.data();
    Ok(graph.push_node(data, Op::Add, vec![a.id(), b.id()], None))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
