use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use num_traits::Float;

/// Negates a value. Recorded as `a * -1`, with `-1` promoted to a fresh leaf.
pub fn neg_op<T: Float>(a: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    mul_op(a, -1)
}
