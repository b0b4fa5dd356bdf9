use crate::error::ScalarGradError;
use crate::graph::{Arena, NodeId};
use num_traits::Float;
use std::collections::{HashMap, HashSet, VecDeque};

/// Collects every node reachable from `root` through parent edges, `root` included.
/// Each node appears once. Cost is bounded by the reachable subgraph, not the arena.
pub(crate) fn reachable<T: Float>(arena: &Arena<T>, root: NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::from([root]);
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        found.push(id);
        for &parent in &arena.node(id).parents {
            if visited.insert(parent) {
                stack.push(parent);
            }
        }
    }
    found
}

/// Counts, for each node in `nodes`, how many times it is used as a parent by nodes in
/// `nodes`. Every node of `nodes` gets an entry, consumers-free ones included.
pub(crate) fn in_degrees<T: Float>(
    arena: &Arena<T>,
    nodes: &[NodeId],
) -> HashMap<NodeId, usize> {
    let mut in_degree: HashMap<NodeId, usize> = nodes.iter().map(|&id| (id, 0)).collect();
    for &id in nodes {
        for &parent in &arena.node(id).parents {
            *in_degree.entry(parent).or_insert(0) += 1;
        }
    }
    in_degree
}

/// Orders the subgraph reachable from `root` so that every node comes after all of its
/// consumers (reverse topological order, `root` first).
///
/// Uses Kahn's algorithm over the "used-by" edges. Every use counts: a node appearing
/// twice in one parent list (`a * a`) has an in-degree of two from that consumer.
pub(crate) fn topological_sort<T: Float>(
    arena: &Arena<T>,
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarGradError> {
    let nodes = reachable(arena, root);
    let mut in_degree = in_degrees(arena, &nodes);
    if in_degree.get(&root).copied().unwrap_or(0) != 0 {
        return Err(ScalarGradError::CycleDetected);
    }

    let mut ready = VecDeque::from([root]);
    let mut order = Vec::with_capacity(nodes.len());
    while let Some(id) = ready.pop_front() {
        order.push(id);
        for &parent in &arena.node(id).parents {
            let remaining = in_degree.entry(parent).or_insert(0);
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                ready.push_back(parent);
            }
        }
    }

    if order.len() != nodes.len() {
        return Err(ScalarGradError::CycleDetected);
    }
    Ok(order)
}
