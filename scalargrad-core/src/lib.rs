//! Scalar-valued reverse-mode automatic differentiation.
//!
//! Build an expression out of [`Value`]s recorded in a [`Graph`], then call
//! [`Value::backward`] on the result to fill in the gradient of every node it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph: Graph = Graph::new();
//! let a = graph.named_leaf("a", 2.0);
//! let b = &a + &a;
//! let c = &b * &a;
//! c.backward().unwrap();
//! assert_eq!(c.data(), 8.0);
//! assert_eq!(a.grad(), 8.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod graph;
pub mod ops;
pub mod value;

pub(crate) mod utils;

pub mod error;

pub use error::ScalarGradError;
pub use graph::{Graph, NodeId};
pub use ops::Operand;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
