//! `intake-core` -- patient-registration field validation.
//!
//! Declares the registration form's fields and their rules, and evaluates
//! candidate records against them. Pure logic: no I/O, no logging.

pub mod error;
pub mod field;
pub mod record;
pub mod validation;
