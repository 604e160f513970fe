//! Converts raw UI values into typed values ready to hand to a backend.
//!
//! The mapping is one-directional and total: malformed input degrades to a
//! default (`NaN`, `"Invalid Date"`) instead of failing.

use crate::schema::{FieldDefinition, FieldType};
use crate::value::{Value, ValueMap, is_truthy, to_display_string, to_number};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Text produced for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Coerces each field's raw value, keyed by field `name`.
///
/// Undefined or `""` always becomes `null`. Otherwise NUMBER goes through
/// numeric coercion, CHECKBOX through truthiness (so `"false"` is `true`),
/// DATE becomes an ISO-8601 string, and every other type passes through.
pub fn map_values_to_dto(fields: &[FieldDefinition], values: &ValueMap) -> ValueMap {
    fields
        .iter()
        .map(|field| {
            let coerced = coerce_value(field.field_type, values.get(&field.name));
            (field.name.clone(), coerced)
        })
        .collect()
}

/// Coerces a single raw value for the given field type.
pub fn coerce_value(field_type: FieldType, raw: Option<&Value>) -> Value {
    let raw = match raw {
        None => return Value::Null,
        Some(Value::Text(s)) if s.is_empty() => return Value::Null,
        Some(v) => v,
    };

    match field_type {
        FieldType::Number => Value::Number(to_number(Some(raw))),
        FieldType::Checkbox => Value::Bool(is_truthy(Some(raw))),
        FieldType::Date => Value::Text(to_iso_string(raw)),
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Select
        | FieldType::Relation => raw.clone(),
    }
}

/// Renders a raw date value as `YYYY-MM-DDTHH:MM:SS.sssZ`, or
/// [`INVALID_DATE`] when it has no date reading.
pub fn to_iso_string(raw: &Value) -> String {
    let parsed = match raw {
        Value::Date(d) => Some(*d),
        Value::Text(s) => parse_date_text(s),
        Value::List(_) => parse_date_text(&to_display_string(Some(raw))),
        Value::Null | Value::Bool(_) | Value::Number(_) => from_millis(to_number(Some(raw))),
    };
    parsed
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

/// Accepts RFC 3339 timestamps, bare dates (UTC midnight), zone-less
/// date-times (read as UTC) and year-month / year-only forms.
fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(d) = DateTime::parse_from_rfc3339(t) {
        return Some(d.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(t, format) {
            return Some(naive.and_utc());
        }
    }
    let date = NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", t), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01-01", t), "%Y-%m-%d"))
        .ok()?;
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}
