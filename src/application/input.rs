//! Coercion of raw form and query values into typed inputs.
//!
//! Multipart fields and query parameters arrive as strings; every helper here
//! reports failures as `ApplicationError::Validation` with a message naming the
//! offending field.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryId;
use crate::domain::news::{Labels, NewsStatus};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;

/// Value that was present but blank is treated the same as an absent one.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_status(value: &str) -> ApplicationResult<NewsStatus> {
    Ok(value.parse::<NewsStatus>()?)
}

pub fn parse_integer(field: &str, value: &str) -> ApplicationResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ApplicationError::validation(format!("{field} must be an integer")))
}

pub fn parse_u32(field: &str, value: &str) -> ApplicationResult<u32> {
    let parsed = parse_integer(field, value)?;
    u32::try_from(parsed)
        .map_err(|_| ApplicationError::validation(format!("{field} must be a positive integer")))
}

pub fn parse_category_id(value: &str) -> ApplicationResult<CategoryId> {
    let id = parse_integer("categoryId", value)?;
    Ok(CategoryId::new(id)?)
}

/// `""` and `"null"` clear the category on update.
pub fn parse_optional_category_id(value: &str) -> ApplicationResult<Option<CategoryId>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        Ok(None)
    } else {
        parse_category_id(trimmed).map(Some)
    }
}

pub fn parse_flag(field: &str, value: &str) -> ApplicationResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ApplicationError::validation(format!(
            "{field} must be true or false"
        ))),
    }
}

/// JSON-encoded array of strings, as sent by the admin form.
pub fn parse_json_labels(field: &str, value: &str) -> ApplicationResult<Labels> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Labels::default());
    }
    let parsed: Value = serde_json::from_str(trimmed).map_err(|_| {
        ApplicationError::validation(format!("{field} must be a JSON array of strings"))
    })?;
    let Value::Array(items) = parsed else {
        return Err(ApplicationError::validation(format!(
            "{field} must be a JSON array of strings"
        )));
    };
    let values = items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(ApplicationError::validation(format!(
                "{field} must be a JSON array of strings"
            ))),
        })
        .collect::<ApplicationResult<Vec<_>>>()?;
    Ok(Labels::new(field, values)?)
}

/// Comma-separated list, as used in query strings.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// JSON-encoded object; blank input yields an empty object.
pub fn parse_metadata(value: &str) -> ApplicationResult<Value> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(Value::Object(map)),
        Ok(Value::Null) => Ok(Value::Object(Default::default())),
        _ => Err(ApplicationError::validation(
            "metadata must be a JSON object",
        )),
    }
}

/// RFC 3339 timestamp or bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(field: &str, value: &str) -> ApplicationResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    parse_date(trimmed)
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .ok_or_else(|| {
            ApplicationError::validation(format!(
                "{field} must be an RFC 3339 timestamp or a YYYY-MM-DD date"
            ))
        })
}

/// Exclusive upper bound: a bare date covers the whole day.
pub fn parse_upper_bound(field: &str, value: &str) -> ApplicationResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Some(date) = parse_date(trimmed) {
        let start = date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        return Ok(start + Duration::days(1));
    }
    parse_timestamp(field, trimmed).map(|ts| ts + Duration::nanoseconds(1))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_reject_decimal_and_text() {
        assert_eq!(parse_integer("page", " 4 ").unwrap(), 4);
        assert!(parse_integer("page", "4.5").is_err());
        let err = parse_integer("categoryId", "abc").unwrap_err();
        assert_eq!(err.to_string(), "categoryId must be an integer");
    }

    #[test]
    fn u32_rejects_negative_values() {
        assert!(parse_u32("limit", "-1").is_err());
    }

    #[test]
    fn category_id_can_be_cleared() {
        assert_eq!(parse_optional_category_id("").unwrap(), None);
        assert_eq!(parse_optional_category_id("null").unwrap(), None);
        assert_eq!(
            parse_optional_category_id("7").unwrap(),
            Some(CategoryId::new(7).unwrap())
        );
        assert!(parse_optional_category_id("0").is_err());
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("isFeatured", "TRUE").unwrap());
        assert!(!parse_flag("isFeatured", "0").unwrap());
        assert!(parse_flag("isFeatured", "maybe").is_err());
    }

    #[test]
    fn labels_must_be_json_string_arrays() {
        let labels = parse_json_labels("tags", r#"["swimming", "Paris 2024"]"#).unwrap();
        assert_eq!(labels.as_slice(), ["swimming", "Paris 2024"]);
        assert!(parse_json_labels("tags", "swimming,athletics").is_err());
        assert!(parse_json_labels("tags", "[1, 2]").is_err());
        assert!(parse_json_labels("tags", r#"{"a": "b"}"#).is_err());
        assert!(parse_json_labels("tags", "").unwrap().is_empty());
    }

    #[test]
    fn metadata_must_be_an_object() {
        assert!(parse_metadata(r#"{"metaTitle": "x"}"#).unwrap().is_object());
        assert!(parse_metadata("[]").is_err());
        assert!(parse_metadata("not json").is_err());
        assert_eq!(parse_metadata("").unwrap(), serde_json::json!({}));
    }

    #[test]
    fn split_list_drops_blank_parts() {
        assert_eq!(split_list(Some("a, ,b,")), vec!["a", "b"]);
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn timestamps_accept_dates_and_rfc3339() {
        let day = parse_timestamp("dateFrom", "2024-08-28").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-08-28T00:00:00+00:00");
        let ts = parse_timestamp("dateFrom", "2024-08-28T10:30:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-08-28T08:30:00+00:00");
        assert!(parse_timestamp("dateFrom", "28/08/2024").is_err());
    }

    #[test]
    fn upper_bound_covers_whole_day() {
        let end = parse_upper_bound("dateTo", "2024-09-08").unwrap();
        assert_eq!(end.to_rfc3339(), "2024-09-09T00:00:00+00:00");
    }
}
