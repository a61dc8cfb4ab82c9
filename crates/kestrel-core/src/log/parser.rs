use super::types::LogRecord;
use serde::Deserialize;

/// Outcome of decoding one raw log line
///
/// A line either yields a usable record or is marked unusable with the
/// reason it was skipped. Unusable lines are absorbed by the caller; they
/// never become errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Record(LogRecord),
    Unusable(SkipReason),
}

/// Why a line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line is not a well-formed JSON object of the expected shape
    MalformedLine,
    /// The object decoded but `url` or `response_time` is missing
    IncompleteRecord,
}

/// Serde view of one raw line; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "@timestamp")]
    timestamp: Option<String>,
    url: Option<String>,
    response_time: Option<f64>,
}

/// Decode one raw line into a log record
///
/// A record requires a non-empty `url` and a present `response_time`; a
/// `response_time` of 0.0 is valid. No range or timestamp-format checks are
/// performed here.
pub fn parse_line(line: &str) -> ParsedLine {
    let raw: RawRecord = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(_) => return ParsedLine::Unusable(SkipReason::MalformedLine),
    };

    let handler = match raw.url {
        Some(url) if !url.is_empty() => url,
        _ => return ParsedLine::Unusable(SkipReason::IncompleteRecord),
    };

    let response_time = match raw.response_time {
        Some(value) => value,
        None => return ParsedLine::Unusable(SkipReason::IncompleteRecord),
    };

    ParsedLine::Record(LogRecord {
        timestamp: raw.timestamp.unwrap_or_default(),
        handler,
        response_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let line = r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "url": "/api/users/...", "response_time": 0.05}"#;

        let parsed = parse_line(line);
        assert_eq!(
            parsed,
            ParsedLine::Record(LogRecord {
                timestamp: "2025-06-22T12:00:00+00:00".to_string(),
                handler: "/api/users/...".to_string(),
                response_time: 0.05,
            })
        );
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let line = r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "url": "/api/users/...", "response_time": 0.05, "status": 200, "http_user_agent": "curl/8.0"}"#;

        assert!(matches!(parse_line(line), ParsedLine::Record(_)));
    }

    #[test]
    fn test_parse_zero_response_time_is_valid() {
        let line = r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "url": "/api/users/...", "response_time": 0.0}"#;

        match parse_line(line) {
            ParsedLine::Record(record) => assert_eq!(record.response_time, 0.0),
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_timestamp_keeps_record() {
        let line = r#"{"url": "/api/users/...", "response_time": 0.05}"#;

        match parse_line(line) {
            ParsedLine::Record(record) => assert_eq!(record.timestamp, ""),
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        let parsed = parse_line("not json at all {");
        assert_eq!(parsed, ParsedLine::Unusable(SkipReason::MalformedLine));
    }

    #[test]
    fn test_parse_non_object_json() {
        assert_eq!(
            parse_line("42"),
            ParsedLine::Unusable(SkipReason::MalformedLine)
        );
        assert_eq!(
            parse_line(r#""just a string""#),
            ParsedLine::Unusable(SkipReason::MalformedLine)
        );
    }

    #[test]
    fn test_parse_non_numeric_response_time_is_malformed() {
        let line = r#"{"url": "/api/users/...", "response_time": "fast"}"#;

        assert_eq!(
            parse_line(line),
            ParsedLine::Unusable(SkipReason::MalformedLine)
        );
    }

    #[test]
    fn test_parse_missing_url() {
        let line = r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "response_time": 0.05}"#;

        assert_eq!(
            parse_line(line),
            ParsedLine::Unusable(SkipReason::IncompleteRecord)
        );
    }

    #[test]
    fn test_parse_null_or_empty_url() {
        let null_url = r#"{"url": null, "response_time": 0.05}"#;
        let empty_url = r#"{"url": "", "response_time": 0.05}"#;

        assert_eq!(
            parse_line(null_url),
            ParsedLine::Unusable(SkipReason::IncompleteRecord)
        );
        assert_eq!(
            parse_line(empty_url),
            ParsedLine::Unusable(SkipReason::IncompleteRecord)
        );
    }

    #[test]
    fn test_parse_missing_response_time() {
        let line = r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "url": "/api/users/..."}"#;

        assert_eq!(
            parse_line(line),
            ParsedLine::Unusable(SkipReason::IncompleteRecord)
        );
    }
}
