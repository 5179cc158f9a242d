//! Parsing promotion expiry text from CMS content.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::StorefrontError;

/// Parse the free-text expiry editors enter for a promotion.
///
/// Accepts RFC 3339 timestamps (`2023-09-19T00:00:00Z`, any offset) and
/// bare dates (`2023-09-19`), which are read as midnight UTC.
pub fn parse_promotion_expiry(text: &str) -> Result<DateTime<Utc>, StorefrontError> {
    let text = text.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| StorefrontError::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339() {
        let parsed = parse_promotion_expiry("2023-09-19T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_offset_is_normalized() {
        let parsed = parse_promotion_expiry("2023-09-19T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        let parsed = parse_promotion_expiry(" 2023-09-19 ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = parse_promotion_expiry("next tuesday").unwrap_err();
        assert_eq!(err, StorefrontError::InvalidTimestamp("next tuesday".to_string()));
    }
}
