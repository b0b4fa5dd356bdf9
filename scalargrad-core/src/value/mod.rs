//! The user-facing scalar handle.

mod debug;

use crate::autograd::{self, Op};
use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::activation::tanh::tanh_node;
use crate::ops::arithmetic::pow::{pow_op, pow_scalar};
use crate::ops::Operand;
use num_traits::Float;

/// A scalar participating in a computation graph.
///
/// A `Value` is a handle (graph + node handle); cloning it does not copy the node.
/// Arithmetic on values records new nodes in the shared graph:
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph: Graph = Graph::new();
/// let x = graph.named_leaf("x", 2.0);
/// let y = x.powi(3);
/// y.backward().unwrap();
/// assert_eq!(y.data(), 8.0);
/// assert_eq!(x.grad(), 12.0);
/// ```
pub struct Value<T: Float = f64> {
    graph: Graph<T>,
    id: NodeId,
}

impl<T: Float> Value<T> {
    pub(crate) fn from_parts(graph: Graph<T>, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// The forward value.
    pub fn data(&self) -> T {
        self.graph.borrow().node(self.id).data
    }

    /// The gradient accumulated so far (0 until a backward pass reaches this node).
    pub fn grad(&self) -> T {
        self.graph.borrow().node(self.id).grad
    }

    pub fn label(&self) -> Option<String> {
        self.graph.borrow().node(self.id).label.clone()
    }

    /// Attaches a debug label. Labels never affect computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.borrow_mut().node_mut(self.id).label = Some(label.into());
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this value was recorded in.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    /// The operation that produced this value.
    pub fn op(&self) -> Op<T> {
        self.graph.borrow().node(self.id).op
    }

    /// The operands this value was computed from, in operand order.
    pub fn parents(&self) -> Vec<Value<T>> {
        let arena = self.graph.borrow();
        arena
            .node(self.id)
            .parents
            .iter()
            .map(|p| Value::from_parts(self.graph.clone(), *p))
            .collect()
    }

    /// Differentiates this value with respect to every node it depends on.
    ///
    /// Seeds this node's gradient with 1 and accumulates into every reachable node.
    /// Gradients are not reset first: call [`Value::zero_grad`] between passes.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        autograd::backward(self)
    }

    /// Resets the gradient of this value and of every node it depends on.
    pub fn zero_grad(&self) {
        autograd::zero_grad(self)
    }

    /// The order in which [`Value::backward`] applies local gradient rules:
    /// every consumer comes before the nodes it consumes.
    pub fn topological_order(&self) -> Result<Vec<Value<T>>, ScalarGradError> {
        let order = autograd::graph::topological_sort(&self.graph.borrow(), self.id)?;
        Ok(order
            .into_iter()
            .map(|id| Value::from_parts(self.graph.clone(), id))
            .collect())
    }

    /// Raises this value to a constant exponent.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidExponentType`] when `exponent` is a graph node.
    pub fn pow(&self, exponent: impl Into<Operand<T>>) -> Result<Value<T>, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this value to an integer power.
    pub fn powi(&self, exponent: i32) -> Value<T> {
        pow_scalar(self, T::from(exponent).unwrap_or_else(T::nan))
    }

    /// Raises this value to a real power.
    pub fn powf(&self, exponent: T) -> Value<T> {
        pow_scalar(self, exponent)
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Value<T> {
        tanh_node(self)
    }
}

impl<T: Float> Clone for Value<T> {
    fn clone(&self) -> Self {
        Value {
            graph: self.graph.clone(),
            id: self.id,
        }
    }
}
