//! Grammar productions, one module per construct.
//!
//! All productions are methods on [`Parser`](crate::Parser). The value and
//! condition grammars are mutually recursive: statistics sample a condition,
//! and most conditions take value parameters.

mod condition;
mod content;
mod effect;
mod value_ref;

pub use value_ref::ValueType;
