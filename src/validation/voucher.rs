use super::{ErrorMap, FormValidator, ValidationMessages};
use crate::error::SchemaError;
use crate::rules::HiddenSet;
use crate::schema::{TableDefinition, VoucherTypeDefinition};
use crate::value::ValueMap;

/// Errors of a single line-item row. `row` is the zero-based row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineErrors {
    pub row: usize,
    pub errors: ErrorMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoucherErrors {
    /// Header field errors, plus a row-count error keyed by the table name.
    pub header: ErrorMap,
    /// Only rows with at least one error are listed.
    pub lines: Vec<LineErrors>,
}

impl VoucherErrors {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.lines.is_empty()
    }
}

/// Validates a voucher's header and each of its line rows independently.
///
/// Visibility rules are only applied to the header. Rows are checked against
/// the column definitions as-is.
#[derive(Debug, Clone)]
pub struct VoucherValidator {
    header: FormValidator,
    lines: FormValidator,
    table: TableDefinition,
    messages: ValidationMessages,
}

impl VoucherValidator {
    pub fn new(voucher: &VoucherTypeDefinition) -> Result<Self, SchemaError> {
        Ok(Self {
            header: FormValidator::new(&voucher.header)?,
            lines: FormValidator::from_fields(&voucher.lines.columns)?,
            table: voucher.lines.clone(),
            messages: ValidationMessages::default(),
        })
    }

    pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
        self.header = self.header.with_messages(messages.clone());
        self.lines = self.lines.with_messages(messages.clone());
        self.messages = messages;
        self
    }

    pub fn validate(&self, header: &ValueMap, lines: &[ValueMap]) -> VoucherErrors {
        self.finish(self.header.validate(header), lines)
    }

    /// Header fields in `hidden` are skipped; rows are validated in full.
    pub fn validate_visible(
        &self,
        header: &ValueMap,
        lines: &[ValueMap],
        hidden: &HiddenSet,
    ) -> VoucherErrors {
        self.finish(self.header.validate_visible(header, hidden), lines)
    }

    fn finish(&self, mut header: ErrorMap, lines: &[ValueMap]) -> VoucherErrors {
        if let Some(min) = self.table.min_rows {
            if lines.len() < min {
                header.insert(self.table.name.clone(), self.messages.min_rows(min));
            }
        }
        if let Some(max) = self.table.max_rows {
            if lines.len() > max {
                header.insert(self.table.name.clone(), self.messages.max_rows(max));
            }
        }

        let lines = lines
            .iter()
            .enumerate()
            .filter_map(|(row, values)| {
                let errors = self.lines.validate(values);
                (!errors.is_empty()).then_some(LineErrors { row, errors })
            })
            .collect();

        VoucherErrors { header, lines }
    }
}
