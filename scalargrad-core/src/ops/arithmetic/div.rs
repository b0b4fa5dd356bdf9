// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_scalar;
use crate::ops::Operand;
use crate::value::Value;
use num_traits::Float;

/// Divides: recorded as `a * b ** -1`.
///
/// Division by a zero-valued `b` is not an error; the reciprocal is infinite and the
/// infinities and NaNs propagate through forward and backward.
pub fn div_op<T: Float>(
    a: &Value<T>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = b.into().into_value(a.graph(), "div")?;
    let reciprocal = pow_scalar(&b, -T::one());
    mul_op(a, &reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
