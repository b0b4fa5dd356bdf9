//! # Reverse-mode driver (`autograd`)
//!
//! [`backward`] seeds the root gradient with 1 and applies each reachable node's
//! local-derivative rule ([`Op::backward`]) exactly once, consumers before producers.
//! Ordering comes from [`graph::topological_sort`]; a breadth-first walk from the root is
//! not enough as soon as an interior node feeds two paths that meet again.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::Op;

use crate::error::ScalarGradError;
use crate::value::Value;
use log::{debug, trace};
use num_traits::Float;

/// Performs the backward pass starting from `root`.
///
/// Gradients accumulate on top of whatever the nodes already hold; only the root's gradient
/// is overwritten with the seed. Use [`zero_grad`] to start from a clean state.
///
/// # Errors
/// Returns [`ScalarGradError::CycleDetected`] if the reachable subgraph cannot be ordered and
/// [`ScalarGradError::BackwardError`] if a rule yields the wrong number of contributions.
pub fn backward<T: Float>(root: &Value<T>) -> Result<(), ScalarGradError> {
    let mut arena = root.graph().borrow_mut();
    let order = graph::topological_sort(&arena, root.id())?;
    debug!(
        "backward: root {}, {} reachable nodes",
        root.id(),
        order.len()
    );

    arena.node_mut(root.id()).grad = T::one();

    let mut inputs = Vec::with_capacity(2);
    for id in order {
        let node = arena.node(id);
        let op = node.op;
        let grad_output = node.grad;
        inputs.clear();
        inputs.extend(node.parents.iter().map(|p| arena.node(*p).data));

        let contributions = op.backward(grad_output, &inputs)?;
        trace!("backward: {} ({}) grad={:?}", id, op.name(), grad_output.to_f64());

        for (i, contribution) in contributions.into_iter().enumerate() {
            let parent = arena.node(id).parents[i];
            let accumulated = arena.node(parent).grad + contribution;
            arena.node_mut(parent).grad = accumulated;
        }
    }
    Ok(())
}

/// Resets to zero the gradient of `root` and of every node reachable from it.
pub fn zero_grad<T: Float>(root: &Value<T>) {
    let mut arena = root.graph().borrow_mut();
    let nodes = graph::reachable(&arena, root.id());
    debug!("zero_grad: root {}, {} nodes", root.id(), nodes.len());
    for id in nodes {
        arena.node_mut(id).grad = T::zero();
    }
}
