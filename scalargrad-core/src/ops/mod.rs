//! # Scalar Operations Module (`ops`)
//!
//! Each operator has a builder function (`xxx_op`) that computes the forward value, records a
//! new node whose parents are the operands, and tags it with the [`Op`](crate::autograd::Op)
//! its backward rule is derived from.
//!
//! - [`arithmetic`]: add, mul, pow (primitive), neg, sub, div (composites).
//! - [`activation`]: tanh.
//!
//! The `std::ops` overloads on [`Value`] forward to these builders. Plain numbers used as
//! operands are promoted to a fresh leaf on every call, through [`Operand`].

pub mod activation;
pub mod arithmetic;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use log::warn;
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Right-hand side of an operator: a graph node or a plain number.
#[derive(Clone, Debug)]
pub enum Operand<T: Float> {
    Scalar(T),
    Node(Value<T>),
}

impl<T: Float> Operand<T> {
    /// Resolves into a node of `graph`. A scalar becomes a new unlabeled leaf; a node must
    /// already belong to `graph`.
    pub(crate) fn into_value(
        self,
        graph: &Graph<T>,
        operation: &str,
    ) -> Result<Value<T>, ScalarGradError> {
        match self {
            Operand::Scalar(data) => Ok(graph.leaf(data)),
            Operand::Node(value) => {
                if value.graph().ptr_eq(graph) {
                    Ok(value)
                } else {
                    warn!("{}: operand {} comes from another graph", operation, value.id());
                    Err(ScalarGradError::GraphMismatch {
                        operation: operation.to_string(),
                    })
                }
            }
        }
    }
}

impl<T: Float> From<Value<T>> for Operand<T> {
    fn from(value: Value<T>) -> Self {
        Operand::Node(value)
    }
}

impl<T: Float> From<&Value<T>> for Operand<T> {
    fn from(value: &Value<T>) -> Self {
        Operand::Node(value.clone())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<T: Float> From<$t> for Operand<T> {
                fn from(data: $t) -> Self {
                    Operand::Scalar(T::from(data).unwrap_or_else(T::nan))
                }
            }
        )*
    };
}

impl_scalar_operand!(f32, f64, i32);

/// Unwraps the result of a builder inside an operator overload.
fn operator_result<T: Float>(result: Result<Value<T>, ScalarGradError>) -> Value<T> {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// Binary operators on owned and borrowed values. The right-hand side is anything that
// converts into an `Operand`.
//
// # Panics
// When both operands are nodes of different graphs.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $builder:ident) => {
        impl<T: Float, R: Into<Operand<T>>> $trait<R> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: R) -> Value<T> {
                operator_result($builder(&self, rhs))
            }
        }

        impl<'a, T: Float, R: Into<Operand<T>>> $trait<R> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: R) -> Value<T> {
                operator_result($builder(self, rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl<T: Float> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        operator_result(neg_op(&self))
    }
}

impl<'a, T: Float> Neg for &'a Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        operator_result(neg_op(self))
    }
}

// Plain number on the left. `k + x` and `k * x` record the same graph as `x + k` and `x * k`;
// for `-` and `/` the number is promoted into the graph of `x` first.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Value<$t>> for $t {
                type Output = Value<$t>;
                fn add(self, rhs: Value<$t>) -> Value<$t> {
                    rhs + self
                }
            }

            impl<'a> Add<&'a Value<$t>> for $t {
                type Output = Value<$t>;
                fn add(self, rhs: &'a Value<$t>) -> Value<$t> {
                    rhs + self
                }
            }

            impl Mul<Value<$t>> for $t {
                type Output = Value<$t>;
                fn mul(self, rhs: Value<$t>) -> Value<$t> {
                    rhs * self
                }
            }

            impl<'a> Mul<&'a Value<$t>> for $t {
                type Output = Value<$t>;
                fn mul(self, rhs: &'a Value<$t>) -> Value<$t> {
                    rhs * self
                }
            }

            impl Sub<Value<$t>> for $t {
                type Output = Value<$t>;
                fn sub(self, rhs: Value<$t>) -> Value<$t> {
                    operator_result(sub_op(&rhs.graph().leaf(self), &rhs))
                }
            }

            impl<'a> Sub<&'a Value<$t>> for $t {
                type Output = Value<$t>;
                fn sub(self, rhs: &'a Value<$t>) -> Value<$t> {
                    operator_result(sub_op(&rhs.graph().leaf(self), rhs))
                }
            }

            impl Div<Value<$t>> for $t {
                type Output = Value<$t>;
                fn div(self, rhs: Value<$t>) -> Value<$t> {
                    operator_result(div_op(&rhs.graph().leaf(self), &rhs))
                }
            }

            impl<'a> Div<&'a Value<$t>> for $t {
                type Output = Value<$t>;
                fn div(self, rhs: &'a Value<$t>) -> Value<$t> {
                    operator_result(div_op(&rhs.graph().leaf(self), rhs))
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
