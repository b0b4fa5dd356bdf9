//! # Computation Graph Arena (`graph`)
//!
//! Every scalar created through a [`Graph`] is stored in a shared arena and addressed by a
//! [`NodeId`]. Parent links are handles into the same arena, so shared sub-expressions are
//! simply handles that appear in several parent lists.
//!
//! The arena only grows: nodes live as long as any [`Graph`] or [`Value`] handle keeps the
//! arena alive.

mod node;

pub use node::NodeId;
pub(crate) use node::Node;

use crate::autograd::Op;
use crate::value::Value;
use log::debug;
use num_traits::Float;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Backing storage of a graph.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Float> Arena<T> {
    fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug_assert!(
            node.parents.iter().all(|p| *p < id),
            "parents must already exist in the arena"
        );
        self.nodes.push(node);
        id
    }
}

/// A dynamically built computation graph of scalar values.
///
/// `Graph` is a cheap, reference-counted handle: cloning it yields another handle to the same
/// arena. It is single-threaded by construction (`!Send`, `!Sync`).
///
/// # Memory
/// The arena only grows. Every operator call appends a node, and a plain number used as an
/// operand appends one more leaf. Nothing is released while a handle to the graph is alive,
/// even for expressions whose `Value`s were dropped long ago. A training loop that rebuilds
/// its loss each step on one long-lived `Graph` therefore grows by the size of that loss
/// every step, while [`backward`](Value::backward) and [`zero_grad`](Value::zero_grad) stay
/// proportional to the reachable subgraph only. Build each step's expression on a fresh
/// `Graph` (carrying parameter data over as new leaves) to keep memory bounded.
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph: Graph = Graph::new();
/// let x = graph.named_leaf("x", 3.0);
/// let y = graph.named_leaf("y", 4.0);
/// let z = &x * &y;
/// z.backward().unwrap();
/// assert_eq!(x.grad(), 4.0);
/// assert_eq!(y.grad(), 3.0);
/// ```
pub struct Graph<T: Float = f64> {
    arena: Rc<RefCell<Arena<T>>>,
}

impl<T: Float> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            arena: Rc::new(RefCell::new(Arena::new())),
        }
    }

    /// Creates an unlabeled leaf holding `data`.
    pub fn leaf(&self, data: T) -> Value<T> {
        self.push_node(data, Op::Leaf, Vec::new(), None)
    }

    /// Creates a leaf holding `data` with a debug label.
    pub fn named_leaf(&self, label: impl Into<String>, data: T) -> Value<T> {
        self.push_node(data, Op::Leaf, Vec::new(), Some(label.into()))
    }

    /// Number of nodes recorded so far, including promoted constants.
    pub fn len(&self) -> usize {
        self.arena.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph, reachable or not.
    pub fn zero_grad(&self) {
        let mut arena = self.arena.borrow_mut();
        debug!("Graph::zero_grad: resetting {} nodes", arena.len());
        for node in arena.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Returns `true` when both handles refer to the same arena.
    pub fn ptr_eq(&self, other: &Graph<T>) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    /// Records a new node and returns its handle. `parents` is moved into the node, so no
    /// two nodes share a parent list.
    pub(crate) fn push_node(
        &self,
        data: T,
        op: Op<T>,
        parents: Vec<NodeId>,
        label: Option<String>,
    ) -> Value<T> {
        let id = self.arena.borrow_mut().push(Node {
            data,
            grad: T::zero(),
            label,
            parents,
            op,
        });
        Value::from_parts(self.clone(), id)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Arena<T>> {
        self.arena.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Arena<T>> {
        self.arena.borrow_mut()
    }

    pub(crate) fn try_borrow(&self) -> Option<Ref<'_, Arena<T>>> {
        self.arena.try_borrow().ok()
    }
}

impl<T: Float> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Graph {
            arena: Rc::clone(&self.arena),
        }
    }
}

impl<T: Float> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_borrow() {
            Some(arena) => write!(f, "Graph(nodes={})", arena.len()),
            None => write!(f, "Graph(<borrowed>)"),
        }
    }
}
