use serde::{Deserialize, Serialize};

use super::{SEQ_LEFT_MARK, SEQ_RIGHT_MARK};

/// `GET /seq` response body
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Seq {
    pub seq: String,
}

impl Seq {
    /// the text shown in the display field
    pub fn decorated(&self) -> String {
        format!("{}{}{}", SEQ_LEFT_MARK, self.seq, SEQ_RIGHT_MARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorated() {
        let seq: Seq = serde_json::from_str(r#"{"seq":"abc123"}"#).unwrap();
        assert_eq!(seq.decorated(), "【abc123】");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let seq: Seq = serde_json::from_str(r#"{"seq": "6101903", "ts": 1}"#).unwrap();
        assert_eq!(seq.seq, "6101903");
    }
}
