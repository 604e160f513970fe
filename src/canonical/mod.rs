//! Boundary between the designer's UI-only config and the persisted
//! canonical voucher-type document.
//!
//! The storage medium is someone else's concern; this module only knows the
//! two shapes and how to convert between them.

pub mod conversion;
pub mod document;
pub mod wizard;

pub use conversion::*;
pub use document::*;
pub use wizard::*;
