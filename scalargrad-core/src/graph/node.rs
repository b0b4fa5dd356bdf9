use crate::autograd::Op;
use std::fmt;

/// Stable handle of a node inside its graph arena.
///
/// Handles are assigned in construction order, so a node's parents always carry
/// smaller handles than the node itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A scalar vertex of the computation graph.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// Forward value, fixed at construction.
    pub(crate) data: T,
    /// Gradient accumulator. Only the backward driver and `zero_grad` write it.
    pub(crate) grad: T,
    pub(crate) label: Option<String>,
    /// Operands this node was computed from, in operand order.
    pub(crate) parents: Vec<NodeId>,
    pub(crate) op: Op<T>,
}
