//! Notification webhooks.

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// A webhook notified when searches find matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub url: Option<FieldValue>,
    #[serde(default)]
    pub username: Option<FieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_webhook() {
        let json = r#"{"name": "ops", "url": "https://hooks.example.com/x", "username": "securelog"}"#;
        let hook: Webhook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.name, Some(FieldValue::from("ops")));
        assert_eq!(hook.username, Some(FieldValue::from("securelog")));
    }
}
