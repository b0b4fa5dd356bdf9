// Primitive builders record their own node kind; the composites expand into them.
pub mod add;
pub mod mul;
pub mod pow;

pub mod div;
pub mod neg;
pub mod sub;

// Re-export the primary operation functions
pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;
