use crate::value::format_number;

/// Message templates used by the validators.
///
/// Placeholders: `{label}` in `required`, `{min}`/`{max}` in the number
/// bounds, `{rows}` in the row-count messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    pub required: String,
    pub min: String,
    pub max: String,
    pub pattern: String,
    pub min_rows: String,
    pub max_rows: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "{label} is required".to_string(),
            min: "Value must be at least {min}".to_string(),
            max: "Value must be at most {max}".to_string(),
            pattern: "Invalid format".to_string(),
            min_rows: "At least {rows} rows are required".to_string(),
            max_rows: "At most {rows} rows are allowed".to_string(),
        }
    }
}

impl ValidationMessages {
    pub(crate) fn required(&self, label: &str) -> String {
        self.required.replace("{label}", label)
    }

    pub(crate) fn min(&self, min: f64) -> String {
        self.min.replace("{min}", &format_number(min))
    }

    pub(crate) fn max(&self, max: f64) -> String {
        self.max.replace("{max}", &format_number(max))
    }

    pub(crate) fn pattern(&self) -> String {
        self.pattern.clone()
    }

    pub(crate) fn min_rows(&self, rows: usize) -> String {
        self.min_rows.replace("{rows}", &rows.to_string())
    }

    pub(crate) fn max_rows(&self, rows: usize) -> String {
        self.max_rows.replace("{rows}", &rows.to_string())
    }
}
