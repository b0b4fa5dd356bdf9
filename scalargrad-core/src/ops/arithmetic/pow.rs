// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::Operand;
use crate::value::Value;
use log::warn;
use num_traits::Float;

/// Raises `base` to a constant exponent: `base ** exponent`.
///
/// The exponent must be a plain number (`i32`, `f32` or `f64`). The check happens before any
/// computation, so a rejected call leaves the graph unchanged.
///
/// Domain problems are not guarded: `0 ** -1` is `+inf`, a negative base with a fractional
/// exponent is NaN, and those values flow through backward as well.
///
/// # Errors
/// [`ScalarGradError::InvalidExponentType`] if `exponent` is a graph node.
pub fn pow_op<T: Float>(
    base: &Value<T>,
    exponent: impl Into<Operand<T>>,
) -> Result<Value<T>, ScalarGradError> {
    match exponent.into() {
        Operand::Scalar(exponent) => Ok(pow_scalar(base, exponent)),
        Operand::Node(node) => {
            warn!("pow: rejected graph node {} as exponent", node.id());
            Err(ScalarGradError::InvalidExponentType { node: node.id() })
        }
    }
}

/// Records `base ** exponent` for an already validated exponent.
pub(crate) fn pow_scalar<T: Float>(base: &Value<T>, exponent: T) -> Value<T> {
    let data = base.data().powf(exponent);
    base.graph()
        .push_node(data, Op::Pow { exponent }, vec![base.id()], None)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
