//! Lenient form field parsing.
//!
//! Form submissions are best-effort: a field that is missing, empty, or
//! unparseable counts as "not provided" rather than an error. Handlers
//! decide which fields are required; everything here is optional.

use std::str::FromStr;

/// Parse an optional numeric field.
///
/// Missing, empty, and unparseable values all collapse to `None`.
pub fn parse_optional<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.filter(|v| !v.is_empty()).and_then(|v| v.parse().ok())
}

/// Split a comma-delimited field into a list.
///
/// Missing or empty input yields an empty list, never `[""]`. Interior
/// empty segments are kept as the delimiter implies them.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// A checkbox-style flag is set only by the literal string `"true"`.
pub fn flag_set(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_valid() {
        assert_eq!(parse_optional::<i32>(Some("42")), Some(42));
        assert_eq!(parse_optional::<f64>(Some("35.68")), Some(35.68));
    }

    #[test]
    fn test_parse_optional_invalid_is_absent() {
        assert_eq!(parse_optional::<i32>(Some("abc")), None);
        assert_eq!(parse_optional::<i32>(Some("4.5")), None);
        assert_eq!(parse_optional::<f64>(Some("north")), None);
    }

    #[test]
    fn test_parse_optional_missing_or_empty() {
        assert_eq!(parse_optional::<i32>(None), None);
        assert_eq!(parse_optional::<i32>(Some("")), None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some("a,b,c")), vec!["a", "b", "c"]);
        assert_eq!(split_list(Some("a")), vec!["a"]);
        assert_eq!(split_list(Some("")), Vec::<String>::new());
        assert_eq!(split_list(None), Vec::<String>::new());
    }

    #[test]
    fn test_split_list_keeps_interior_empties() {
        assert_eq!(split_list(Some("a,,b")), vec!["a", "", "b"]);
    }

    #[test]
    fn test_flag_set_literal_true_only() {
        assert!(flag_set(Some("true")));
        assert!(!flag_set(Some("TRUE")));
        assert!(!flag_set(Some("1")));
        assert!(!flag_set(Some("")));
        assert!(!flag_set(None));
    }
}
