use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use log::debug;
use num_traits::Float;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Perturbation {epsilon:?} vanished for input {input_index} at {point:?}")]
    PerturbationTooSmall {
        input_index: usize,
        epsilon: f64,
        point: f64,
    },
    #[error("Engine error during gradient check: {0}")]
    EngineError(ScalarGradError),
}

// Map ScalarGradError to GradCheckError::EngineError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Tolerances for [`check_grad`].
///
/// A gradient is accepted when the absolute difference is within `abs_tol`, or within
/// `rel_tol` times the larger magnitude of the two gradients (`approx::relative_eq!`).
/// The two tolerances are alternatives, not a sum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference step.
    pub epsilon: f64,
    pub abs_tol: f64,
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tol: 1e-6,
            rel_tol: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must return the
/// output node, built in that graph. The analytical gradient comes from a single backward
/// pass; each numerical gradient is `(f(x + ε) - f(x - ε)) / 2ε` with both sides evaluated on
/// their own fresh graph.
///
/// ```
/// use scalargrad_core::autograd::grad_check::{check_grad, GradCheckConfig};
///
/// let f = |_: &scalargrad_core::Graph, x: &[scalargrad_core::Value]| Ok((&x[0] * &x[1]).tanh());
/// check_grad(f, &[0.3, -0.7], &GradCheckConfig::default()).unwrap();
/// ```
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    T: Float,
    F: Fn(&Graph<T>, &[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    // --- Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Value<T>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = build_output(&func, &graph, &leaves)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|leaf| to_f64(leaf.grad())).collect();

    // --- Numerical gradients ---
    let epsilon = T::from(config.epsilon).unwrap_or_else(T::zero);
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut point = inputs.to_vec();
        point[i] = inputs[i] + epsilon;
        let x_plus = point[i];
        let loss_plus = evaluate(&func, &point)?;
        point[i] = inputs[i] - epsilon;
        let x_minus = point[i];
        let loss_minus = evaluate(&func, &point)?;

        // Divide by the step actually taken after rounding to `T`.
        let step = to_f64(x_plus) - to_f64(x_minus);
        if step == 0.0 {
            return Err(GradCheckError::PerturbationTooSmall {
                input_index: i,
                epsilon: config.epsilon,
                point: to_f64(inputs[i]),
            });
        }
        let numerical_grad = (loss_plus - loss_minus) / step;

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {}: analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tol,
            max_relative = config.rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn build_output<T, F>(
    func: &F,
    graph: &Graph<T>,
    leaves: &[Value<T>],
) -> Result<Value<T>, GradCheckError>
where
    T: Float,
    F: Fn(&Graph<T>, &[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let output = func(graph, leaves).map_err(GradCheckError::ForwardPassError)?;
    if !output.graph().ptr_eq(graph) {
        return Err(GradCheckError::ForwardPassError(ScalarGradError::GraphMismatch {
            operation: "check_grad".to_string(),
        }));
    }
    Ok(output)
}

fn evaluate<T, F>(func: &F, point: &[T]) -> Result<f64, GradCheckError>
where
    T: Float,
    F: Fn(&Graph<T>, &[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<T>> = point.iter().map(|&x| graph.leaf(x)).collect();
    Ok(to_f64(build_output(func, &graph, &leaves)?.data()))
}

fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
