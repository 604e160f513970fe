//! Field validation for forms and vouchers.
//!
//! Validation results are data: a map from field `name` to one message.
//! Only a malformed definition (an unparsable `pattern`) is an error, and it
//! surfaces when the validator is built. Patterns support look-around and
//! backreferences, as authored for browser-side validation.

use crate::error::SchemaError;
use crate::rules::HiddenSet;
use crate::schema::{FieldDefinition, FieldType, FormDefinition};
use crate::value::{Value, ValueMap, is_empty_value, to_display_string, to_number};
use ahash::AHashMap;
use fancy_regex::Regex;

mod messages;
mod voucher;

pub use messages::ValidationMessages;
pub use voucher::{LineErrors, VoucherErrors, VoucherValidator};

/// Field `name` -> message.
pub type ErrorMap = AHashMap<String, String>;

#[derive(Debug, Clone)]
struct CompiledField {
    field: FieldDefinition,
    pattern: Option<Regex>,
}

/// A form definition prepared for repeated validation.
#[derive(Debug, Clone)]
pub struct FormValidator {
    fields: Vec<CompiledField>,
    messages: ValidationMessages,
}

impl FormValidator {
    /// Prepares `form` for validation, compiling every field pattern.
    pub fn new(form: &FormDefinition) -> Result<Self, SchemaError> {
        Self::from_fields(&form.fields)
    }

    /// Builds a validator over a bare list of fields, e.g. table columns.
    pub fn from_fields(fields: &[FieldDefinition]) -> Result<Self, SchemaError> {
        let fields = fields
            .iter()
            .map(|field| {
                let pattern = field
                    .pattern
                    .as_deref()
                    .map(|source| {
                        Regex::new(source).map_err(|e| SchemaError::InvalidPattern {
                            field: field.name.clone(),
                            pattern: source.to_string(),
                            message: e.to_string(),
                        })
                    })
                    .transpose()?;
                Ok(CompiledField {
                    field: field.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self {
            fields,
            messages: ValidationMessages::default(),
        })
    }

    pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    /// Validates every field in declaration order.
    pub fn validate(&self, values: &ValueMap) -> ErrorMap {
        self.validate_filtered(values, |_| true)
    }

    /// Like [`validate`](Self::validate) but skips fields whose id is hidden.
    pub fn validate_visible(&self, values: &ValueMap, hidden: &HiddenSet) -> ErrorMap {
        self.validate_filtered(values, |field| !hidden.contains(&field.id))
    }

    fn validate_filtered<F>(&self, values: &ValueMap, include: F) -> ErrorMap
    where
        F: Fn(&FieldDefinition) -> bool,
    {
        let mut errors = ErrorMap::new();
        for compiled in self.fields.iter().filter(|c| include(&c.field)) {
            if let Some(message) = self.check_field(compiled, values.get(&compiled.field.name)) {
                errors.insert(compiled.field.name.clone(), message);
            }
        }
        errors
    }

    /// Runs the checks for one field. Later checks overwrite earlier ones, so
    /// a field reports at most one message.
    fn check_field(&self, compiled: &CompiledField, value: Option<&Value>) -> Option<String> {
        let field = &compiled.field;
        let empty = is_empty_value(value);

        if field.required && empty {
            return Some(self.messages.required(&field.label));
        }
        if empty {
            return None;
        }

        let mut error = None;
        if field.field_type == FieldType::Number {
            let number = to_number(value);
            if let Some(min) = field.min {
                if number < min {
                    error = Some(self.messages.min(min));
                }
            }
            if let Some(max) = field.max {
                if number > max {
                    error = Some(self.messages.max(max));
                }
            }
        }
        if let Some(pattern) = &compiled.pattern {
            let text = to_display_string(value);
            let matched = pattern.is_match(&text).unwrap_or_else(|e| {
                tracing::warn!(field = %field.name, error = %e, "pattern could not be evaluated");
                false
            });
            if !matched {
                error = Some(self.messages.pattern());
            }
        }
        error
    }
}

/// One-shot validation of `values` against `form`.
pub fn validate_form(form: &FormDefinition, values: &ValueMap) -> Result<ErrorMap, SchemaError> {
    Ok(FormValidator::new(form)?.validate(values))
}
