use crate::graph::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The exponent passed to `pow` was a graph node rather than a constant.
    #[error("Invalid exponent type: pow expects a constant real or integer exponent, got graph node {node}")]
    InvalidExponentType { node: NodeId },

    #[error("Operands of '{operation}' belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Backward error: {0}")]
    BackwardError(String),

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,
}
