/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations, dispatching between
/// scalar arithmetic and element-wise sample-array arithmetic.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding the
/// symbol table and the sampler, and statement execution.
pub mod core;
