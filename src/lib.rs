//! # docform - Definition and Layout Engine for Data-Entry Documents
//!
//! **docform** turns declarative schemas into working data-entry documents
//! without recompilation. Non-programmers describe generic forms and
//! multi-section vouchers as data; this crate decides which fields are
//! visible, validates what was entered, coerces the values for submission and
//! lays the fields out on a 12-column grid for the visual designer.
//!
//! The crate never renders, persists or talks to a backend. It produces plain
//! data structures (hidden-field sets, error maps, coerced values, grid
//! placements) for a rendering layer to consume.
//!
//! ## Core Workflow
//!
//! 1.  **Load a definition**: parse a [`schema::FormDefinition`] or
//!     [`schema::VoucherTypeDefinition`] from JSON (or build one in code).
//! 2.  **On every value change**: call [`rules::evaluate_visibility`] to get
//!     the hidden set, then validate with a [`validation::FormValidator`].
//! 3.  **On submit**: map the raw values with [`coercion::map_values_to_dto`].
//! 4.  **In the designer**: compute placements with [`layout::AutoPlacer`] and
//!     apply edits with [`layout::apply_command`]; hand the result across the
//!     persistence boundary through [`canonical::IntoCanonical`].
//!
//! ## Quick Start
//!
//! ```rust
//! use docform::prelude::*;
//! use serde_json::json;
//!
//! let mut form = FormDefinition::new("signup", "Sign up");
//! form.fields.push(FieldDefinition::new("kind", "Kind", FieldType::Select));
//! form.fields.push(
//!     FieldDefinition::new("age", "Age", FieldType::Number).required().with_min(18.0),
//! );
//! form.rules.push(RuleDefinition::hide_when(
//!     "hide-age",
//!     "age",
//!     MatchType::And,
//!     vec![RuleCondition::new("kind", Operator::Equals, Some(Value::from("company")))],
//! ));
//!
//! let values = value_map_from_json(json!({ "kind": "person", "age": "10" }));
//!
//! let hidden = evaluate_visibility(&form.rules, &values);
//! assert!(hidden.is_empty());
//!
//! let validator = FormValidator::new(&form).unwrap();
//! let errors = validator.validate_visible(&values, &hidden);
//! assert_eq!(errors.get("age").map(String::as_str), Some("Value must be at least 18"));
//!
//! let dto = map_values_to_dto(&form.fields, &values);
//! assert_eq!(dto.get("age"), Some(&Value::Number(10.0)));
//! ```

pub mod canonical;
pub mod coercion;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod validation;
pub mod value;
