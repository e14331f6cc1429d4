/// The scalar-or-samples value union.
pub mod core;
