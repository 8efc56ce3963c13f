//! Grammar tests.
//!
//! - `value_ref`: arithmetic shape, variables, casts, statistics
//! - `condition`: every condition family, list sugar, nesting, round trips
//! - `content`: effects, effects groups, records and files
//! - `errors`: furthest-failure positions, codes, options
//! - `properties`: proptest round trips through `Display`

mod errors;
mod properties;
mod value_ref;

use astra_ir::ValueRef;

pub(crate) fn int(value: i32) -> ValueRef<i32> {
    ValueRef::Constant(value)
}

pub(crate) fn double(value: f64) -> ValueRef<f64> {
    ValueRef::Constant(value)
}

pub(crate) fn string(value: &str) -> ValueRef<String> {
    ValueRef::Constant(value.to_owned())
}
