use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;
use crate::value::Value;
use num_traits::Float;

/// Subtracts: recorded as `a + (-b)`.
///
/// A plain-number `b` is promoted to a leaf first, then negated like any other node.
pub fn sub_op<T: Float>(
    a: &Value<T>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = b.into().into_value(a.graph(), "sub")?;
    let negated = neg_op(&b)?;
    add_op(a, &negated)
}
