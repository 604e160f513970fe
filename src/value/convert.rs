//! Explicit conversions used by the rule, validation and coercion engines.
//!
//! Field values arrive loosely typed from the UI (numbers typed into text
//! inputs, checkbox states, date strings). These helpers pin down how each
//! variant converts, so operator semantics never depend on implicit coercion.
//! Every function takes `Option<&Value>` where `None` means the value map had
//! no entry for the key.

use super::Value;
use chrono::SecondsFormat;

/// Formats a number the way form values are displayed: integral values have
/// no fractional part, `-0` prints as `0`, and magnitudes of `1e21` and above
/// or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Numeric coercion. Anything without a numeric reading becomes `NaN`.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => *n,
        Some(Value::Text(s)) => parse_number(s),
        Some(Value::Date(d)) => d.timestamp_millis() as f64,
        Some(Value::List(items)) => match items.as_slice() {
            [] => 0.0,
            [single] => to_number(Some(single)),
            _ => f64::NAN,
        },
    }
}

/// Parses a numeric literal out of free text.
///
/// Accepts surrounding whitespace, signed decimals with exponents,
/// `0x`/`0o`/`0b` prefixed integers and `Infinity`. Blank text is `0`.
pub fn parse_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| t.strip_prefix(p)) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }
    if t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        t.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// String form used by CONTAINS and pattern checks.
pub fn to_display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Date(d)) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
        Some(v) => v.to_string(),
    }
}

/// Truthiness as used by the CHECKBOX coercion: `null`, `false`, `0`, `NaN`
/// and the empty string are false, every other value (lists included) is true.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => *n != 0.0 && !n.is_nan(),
        Some(Value::Text(s)) => !s.is_empty(),
        Some(Value::Date(_)) | Some(Value::List(_)) => true,
    }
}

/// Only undefined, `null` and `""` count as empty. `0` and `false` do not.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Text(s)) => s.is_empty(),
        _ => false,
    }
}

/// Loose equality between a field value and a rule operand.
///
/// Numbers stored as text still match numeric operands (`"5"` equals `5`),
/// booleans compare as `0`/`1`, and `null` only equals `null`/undefined.
pub fn loose_eq(left: Option<&Value>, right: Option<&Value>) -> bool {
    let (l, r) = match (left, right) {
        (None | Some(Value::Null), None | Some(Value::Null)) => return true,
        (None | Some(Value::Null), _) | (_, None | Some(Value::Null)) => return false,
        (Some(l), Some(r)) => (l, r),
    };

    match (l, r) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Bool(_), other) => loose_eq(Some(&Value::Number(to_number(Some(l)))), Some(other)),
        (other, Value::Bool(_)) => loose_eq(Some(other), Some(&Value::Number(to_number(Some(r))))),
        (Value::Number(n), Value::Text(_)) => *n == to_number(Some(r)),
        (Value::Text(_), Value::Number(n)) => to_number(Some(l)) == *n,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(Some(x), Some(y)))
        }
        (Value::List(_), other) => loose_eq(Some(&Value::Text(l.to_string())), Some(other)),
        (other, Value::List(_)) => loose_eq(Some(other), Some(&Value::Text(r.to_string()))),
        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::Date(d), Value::Number(n)) | (Value::Number(n), Value::Date(d)) => {
            d.timestamp_millis() as f64 == *n
        }
        (Value::Date(_), Value::Text(s)) | (Value::Text(s), Value::Date(_)) => {
            let date = if matches!(l, Value::Date(_)) { l } else { r };
            to_display_string(Some(date)) == *s
        }
        // Null is handled before the match.
        (Value::Null, _) | (_, Value::Null) => false,
    }
}
