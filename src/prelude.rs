//! Prelude module for convenient imports
//!
//! Re-exports the types and functions a renderer or designer integration
//! touches on every interaction.
//!
//! # Example
//!
//! ```rust
//! use docform::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form = FormDefinition::from_json(r#"{
//!     "id": "f1",
//!     "name": "Contact",
//!     "fields": [
//!         { "id": "email", "name": "email", "label": "Email", "type": "TEXT",
//!           "required": true, "pattern": "^[^@]+@[^@]+$" }
//!     ]
//! }"#)?;
//!
//! let values = ValueMap::new();
//! let errors = validate_form(&form, &values)?;
//! assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Schema model
pub use crate::schema::{
    Effect, FieldDefinition, FieldType, FieldWidth, FormDefinition, MatchType, Operator,
    RuleCondition, RuleDefinition, RuleType, SectionDefinition, SelectOption, TableDefinition,
    VoucherTypeDefinition,
};

// Values
pub use crate::value::{Value, ValueMap, value_map_from_json};

// Engines
pub use crate::coercion::map_values_to_dto;
pub use crate::rules::{
    HiddenSet, TraceFormatter, check_condition, evaluate_visibility, explain_visibility,
};
pub use crate::validation::{ErrorMap, FormValidator, VoucherValidator, validate_form};

// Layout
pub use crate::layout::{
    AutoPlacer, FieldLayout, FieldSelection, LayoutCommand, PlacementInput, SectionType, UiMode,
    VoucherLayoutConfig, apply_command, run_auto_placement,
};

// Canonical boundary
pub use crate::canonical::{CanonicalVoucherType, FromCanonical, IntoCanonical, WizardConfig};

// Error types
pub use crate::error::{CanonicalError, LayoutError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
