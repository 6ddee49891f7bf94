//! Structured filter stage.

use chrono::NaiveDate;

use crate::format::coerce_number;
use crate::format::parse_date;
use crate::model::ActiveFilters;
use crate::model::FilterSpec;
use crate::model::FilterType;
use crate::model::FilterValue;
use crate::model::Row;
use crate::model::Value;

/// Returns `true` if the row satisfies every active filter.
///
/// Active entries with no matching spec are skipped.
pub fn matches(row: &Row, specs: &[FilterSpec], active: &ActiveFilters) -> bool {
    active.constraints().all(|(key, value)| {
        match specs.iter().find(|s| s.key == key) {
            Some(spec) => apply(spec, row.value(key), value),
            None => true,
        }
    })
}

/// Applies one filter predicate to a field value.
pub fn apply(spec: &FilterSpec, field: &Value, filter: &FilterValue) -> bool {
    match (spec.kind, filter) {
        (_, FilterValue::All) => true,
        (FilterType::Select, FilterValue::Single(wanted)) => select_matches(field, wanted),
        (FilterType::Select, FilterValue::Multiple(wanted)) => {
            wanted.is_empty() || wanted.iter().any(|w| select_matches(field, w))
        }
        (FilterType::Date, FilterValue::Single(wanted)) => match (day(field), day(wanted)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        (FilterType::DateRange, FilterValue::Range { start, end }) => {
            match (start.as_ref().and_then(day), end.as_ref().and_then(day)) {
                (Some(start), Some(end)) => day(field).is_some_and(|d| start <= d && d <= end),
                _ => true,
            }
        }
        (FilterType::Number, FilterValue::Single(wanted)) => {
            match (coerce_number(field), coerce_number(wanted)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        (FilterType::Text, FilterValue::Single(wanted)) => field
            .to_string()
            .to_lowercase()
            .contains(&wanted.to_string().to_lowercase()),
        (kind, value) => {
            log::debug!("Filter '{}' ({:?}) ignores value {:?}", spec.key, kind, value);
            true
        }
    }
}

/// Single-value select rule: equal, or contained when the field is a list.
fn select_matches(field: &Value, wanted: &Value) -> bool {
    match field {
        Value::List(items) => items.iter().any(|item| item.loose_eq(wanted)),
        other => other.loose_eq(wanted),
    }
}

fn day(value: &Value) -> Option<NaiveDate> {
    parse_date(value).map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: FilterType) -> FilterSpec {
        FilterSpec::new("f", "F", kind)
    }

    #[test]
    fn test_select_single_and_list_field() {
        let s = spec(FilterType::Select);
        assert!(apply(&s, &Value::from("open"), &"open".into()));
        assert!(!apply(&s, &Value::from("closed"), &"open".into()));
        assert!(apply(&s, &Value::from(vec!["a", "open"]), &"open".into()));
    }

    #[test]
    fn test_select_multiple_is_any() {
        let s = spec(FilterType::Select).multiple();
        let wanted = FilterValue::Multiple(vec!["a".into(), "b".into()]);
        assert!(apply(&s, &Value::from("b"), &wanted));
        assert!(!apply(&s, &Value::from("c"), &wanted));
    }

    #[test]
    fn test_date_same_day_ignores_time() {
        let s = spec(FilterType::Date);
        assert!(apply(&s, &Value::from("2024-05-01T18:30:00"), &"2024-05-01".into()));
        assert!(!apply(&s, &Value::from("2024-05-02"), &"2024-05-01".into()));
        assert!(!apply(&s, &Value::from("garbage"), &"2024-05-01".into()));
    }

    #[test]
    fn test_date_range_inclusive_and_open_bounds() {
        let s = spec(FilterType::DateRange);
        let range = FilterValue::range("2024-01-01", "2024-01-31");
        assert!(apply(&s, &Value::from("2024-01-01"), &range));
        assert!(apply(&s, &Value::from("2024-01-31T23:59:00"), &range));
        assert!(!apply(&s, &Value::from("2024-02-01"), &range));

        let open = FilterValue::Range {
            start: Some("2024-01-01".into()),
            end: None,
        };
        assert!(apply(&s, &Value::from("1999-01-01"), &open));
    }

    #[test]
    fn test_number_and_text() {
        assert!(apply(&spec(FilterType::Number), &Value::from("42"), &42i64.into()));
        assert!(!apply(&spec(FilterType::Number), &Value::from("x"), &42i64.into()));
        assert!(apply(&spec(FilterType::Text), &Value::from("Hello World"), &"WORLD".into()));
    }

    #[test]
    fn test_missing_spec_is_skipped() {
        let active = ActiveFilters::new().with("unknown", "x");
        assert!(matches(&Row::new("1"), &[], &active));
    }
}
