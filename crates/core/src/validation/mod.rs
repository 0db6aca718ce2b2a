//! Field validation engine.
//!
//! Provides rule and result types, a serializable schema document, the
//! compiled [`schema::Schema`], and a pure-logic evaluator.

pub mod definition;
pub mod evaluator;
pub mod rules;
pub mod schema;
