//! Declarative schema types for forms and vouchers.
//!
//! These types carry no behavior beyond lookups; the engines in
//! [`crate::rules`], [`crate::validation`] and [`crate::coercion`] consume them.

pub mod document;
pub mod field;
pub mod rule;
pub mod section;
pub mod table;

pub use document::*;
pub use field::*;
pub use rule::*;
pub use section::*;
pub use table::*;
