//! The built-in immutable values.

pub(crate) mod core;
