use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET /seq` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeqReply {
    pub seq: String,
}

/// Render the ticket number: the `YYMMDD` date without its first digit,
/// then the counter padded to at least two digits.
pub fn format_seq(date: NaiveDate, n: i32) -> String {
    let day = date.format("%y%m%d").to_string();
    format!("{}{:02}", &day[1..], n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_seq() {
        assert_eq!(format_seq(day(2026, 10, 19), 3), "6101903");
        assert_eq!(format_seq(day(2026, 10, 19), 42), "6101942");
        assert_eq!(format_seq(day(2026, 10, 19), 123), "61019123");
        assert_eq!(format_seq(day(2030, 1, 5), 1), "0010501");
    }

    #[test]
    fn test_reply_shape() {
        let body = serde_json::to_string(&SeqReply {
            seq: "6101903".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"seq":"6101903"}"#);
    }
}
