//! Type-aware value formatting.
//!
//! The formatter is the single display layer for cells and also the text
//! that search matches against. It never fails: unparsable input degrades
//! to a default (`$0`, `0%`) or to the value's own string form.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::model::ColumnSpec;
use crate::model::ColumnType;
use crate::model::Row;
use crate::model::Value;
use crate::model::number_to_string;

/// Placeholder rendered for null values.
pub const NULL_PLACEHOLDER: &str = "–";

const CURRENCY_SYMBOL: &str = "$";
const CURRENCY_PREFIXES: [char; 6] = ['$', '€', '£', '¥', '₹', '₩'];

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const DATETIME_INPUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_INPUTS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Formats a raw value for display under a column type.
///
/// # Example
///
/// ```
/// use dashgrid::format::format_value;
/// use dashgrid::model::{ColumnType, Value};
///
/// assert_eq!(format_value(&Value::from("5000"), ColumnType::Currency), "$5,000");
/// assert_eq!(format_value(&Value::from(12.5), ColumnType::Percentage), "12.5%");
/// assert_eq!(format_value(&Value::Null, ColumnType::Text), "–");
/// ```
pub fn format_value(value: &Value, kind: ColumnType) -> String {
    if value.is_null() {
        return NULL_PLACEHOLDER.to_string();
    }

    match kind {
        ColumnType::Currency => format_currency(coerce_number(value).unwrap_or(0.0)),
        ColumnType::Percentage => {
            format!("{}%", number_to_string(coerce_number(value).unwrap_or(0.0)))
        }
        ColumnType::Date => match parse_date(value) {
            Some(dt) => dt.format(DATE_FORMAT).to_string(),
            None => value.to_string(),
        },
        ColumnType::Datetime => match parse_date(value) {
            Some(dt) => dt.format(DATETIME_FORMAT).to_string(),
            None => value.to_string(),
        },
        ColumnType::Checkbox => {
            if value.is_truthy() {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        ColumnType::Text | ColumnType::Select | ColumnType::Multiselect => plain(value),
    }
}

/// Renders one cell of a row, honoring the column's custom renderer.
pub fn render_cell(column: &ColumnSpec, row: &Row) -> String {
    let value = row.value(&column.key);
    match &column.renderer {
        Some(renderer) => renderer.render(value, row),
        None => format_value(value, column.kind),
    }
}

/// String form for untyped display: lists join with `", "`, `false` and
/// `NaN` render empty.
fn plain(value: &Value) -> String {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Bool(false) => String::new(),
        Value::Number(n) if n.is_nan() => String::new(),
        other => other.to_string(),
    }
}

/// Coerces a value to a number.
///
/// Text may carry a leading sign, currency symbols, thousands separators
/// and a trailing `%`. Booleans coerce to 1/0. Returns `None` for anything
/// that does not parse to a finite number.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_finite() => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => parse_number_text(s),
        _ => None,
    }
}

fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.trim_start_matches(|c: char| CURRENCY_PREFIXES.contains(&c) || c.is_whitespace());
    let rest = rest.strip_suffix('%').unwrap_or(rest).trim_end();
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let n: f64 = cleaned.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(if negative { -n } else { n })
}

/// Parses a value as a date or date-time.
///
/// Accepts RFC 3339, ISO date-times with or without seconds, `YYYY-MM-DD`,
/// `MM/DD/YYYY`, and numbers as epoch milliseconds. Offsets are dropped
/// (the wall-clock time as written is kept).
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Date(d) => d.and_hms_opt(0, 0, 0),
        Value::DateTime(dt) => Some(*dt),
        Value::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.naive_utc())
        }
        Value::Text(s) => parse_date_text(s.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for format in DATETIME_INPUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in DATE_INPUTS {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Formats an amount as `$1,234` / `$1,234.50` / `-$12`.
///
/// Cents are shown only when non-zero, always with two digits. Amounts
/// too large for `Decimal` are grouped from their plain integer form.
pub fn format_currency(amount: f64) -> String {
    let Ok(decimal) = Decimal::try_from(amount) else {
        if !amount.is_finite() {
            return format!("{}0", CURRENCY_SYMBOL);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        let whole = number_to_string(amount.abs().trunc());
        return format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&whole));
    };
    let rounded = decimal.round_dp(2);
    let abs = rounded.abs();
    let whole = abs.trunc().to_string();
    let cents = (abs.fract() * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let mut out = format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&whole));
    if cents > 0 {
        out.push_str(&format!(".{:02}", cents));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
