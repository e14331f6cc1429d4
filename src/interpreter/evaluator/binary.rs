/// Dispatch of binary operators by operand shape.
pub mod core;

/// Element-wise evaluation over sample arrays.
pub mod array;

/// Scalar arithmetic and its domain checks.
pub mod scalar;
