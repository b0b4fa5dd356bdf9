use crate::error::ScalarGradError;
use num_traits::Float;

/// Operation-kind tag recorded on every node.
///
/// The tag carries only the numeric parameters the local-derivative rule needs; parent
/// values are read from the graph when the rule runs. Subtraction, negation and division
/// are not tags of their own: they are recorded as the `Add`/`Mul`/`Pow` nodes they
/// expand to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op<T> {
    /// An input or promoted constant. Its rule does nothing.
    Leaf,
    Add,
    Mul,
    /// Power by a constant exponent.
    Pow { exponent: T },
    /// Hyperbolic tangent, caching the forward output `t` for the `1 - t²` rule.
    Tanh { output: T },
}

impl<T: Float> Op<T> {
    /// Number of parents a node with this tag has.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Tanh { .. } => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Pow { .. } => "pow",
            Op::Tanh { .. } => "tanh",
        }
    }

    /// Computes the contribution of this node to each of its parents' gradients.
    ///
    /// `grad_output` is the node's own accumulated gradient and `inputs` holds the forward
    /// values of its parents. The returned contributions are in parent order and are meant
    /// to be *added* to the parents' gradients.
    ///
    /// No domain checks happen here: a zero base with a negative exponent yields infinities
    /// and NaNs exactly as IEEE-754 arithmetic produces them.
    pub fn backward(&self, grad_output: T, inputs: &[T]) -> Result<Vec<T>, ScalarGradError> {
        if inputs.len() != self.arity() {
            return Err(ScalarGradError::BackwardError(format!(
                "'{}' expects {} inputs, got {}",
                self.name(),
                self.arity(),
                inputs.len()
            )));
        }
        let grads = match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![grad_output, grad_output],
            Op::Mul => vec![grad_output * inputs[1], grad_output * inputs[0]],
            Op::Pow { exponent } => {
                vec![grad_output * (exponent * inputs[0].powf(exponent - T::one()))]
            }
            Op::Tanh { output } => vec![(T::one() - output * output) * grad_output],
        };
        Ok(grads)
    }
}
