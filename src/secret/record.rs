use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A secret accepted by the save dialog, ready to be handed to whatever
/// stores it. The storing side owns deleting it after `expiration`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSecret {
    pub label: String,
    pub value: String,
    pub expiration: DateTime<Local>,
}

impl SavedSecret {
    pub fn new(label: String, value: String, expiration: DateTime<Local>) -> Self {
        Self {
            label,
            value,
            expiration,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Local>) -> bool {
        now >= self.expiration
    }
}

impl fmt::Debug for SavedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedSecret")
            .field("label", &self.label)
            .field("value", &"<redacted>")
            .field("expiration", &self.expiration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn sample() -> SavedSecret {
        let expiration = Local.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        SavedSecret::new("db".to_string(), "hunter2".to_string(), expiration)
    }

    #[test]
    fn test_is_expired_at() {
        let secret = sample();
        assert!(!secret.is_expired_at(secret.expiration - TimeDelta::seconds(1)));
        assert!(secret.is_expired_at(secret.expiration));
        assert!(secret.is_expired_at(secret.expiration + TimeDelta::days(1)));
    }

    #[test]
    fn test_debug_hides_value() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("db"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_json_shape() {
        let secret = sample();
        let json: serde_json::Value = serde_json::to_value(&secret).unwrap();

        assert_eq!(json["label"], "db");
        assert_eq!(json["value"], "hunter2");
        assert!(json["expiration"].as_str().unwrap().starts_with("2024-01-0"));

        let back: SavedSecret = serde_json::from_value(json).unwrap();
        assert_eq!(back, secret);
    }
}
