use super::Value;
use num_traits::Float;
use std::fmt;

// Short form: label and data only.
impl<T: Float + fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.graph.borrow();
        let node = arena.node(self.id);
        match &node.label {
            Some(label) if !label.is_empty() => {
                write!(f, "Value(label = {}, data = {})", label, node.data)
            }
            _ => write!(f, "Value(data = {})", node.data),
        }
    }
}

// Manual implementation: deriving would print the whole arena.
impl<T: Float + fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.try_borrow() {
            Some(arena) => {
                let node = arena.node(self.id);
                write!(
                    f,
                    "Value(id={}, label={:?}, data={:?}, grad={:?}, op={:?}, parents={:?})",
                    self.id, node.label, node.data, node.grad, node.op, node.parents
                )
            }
            None => write!(f, "Value(id={}, <graph borrowed>)", self.id),
        }
    }
}
