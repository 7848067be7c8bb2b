//! Push Alert Notifications
//!
//! Shapes a push event payload into the notification the service worker
//! asks the browser to display. The payload is optional JSON with optional
//! `title` and `body` fields; absent fields fall back to the fixed alert
//! copy and every notification carries the same icon.

use serde::Deserialize;

use crate::error::Result;

/// Title used when the payload carries none
pub const DEFAULT_PUSH_TITLE: &str = "New Arbitrage Alert!";

/// Body used when the payload carries none
pub const DEFAULT_PUSH_BODY: &str =
    "We found new surebets or middles in your favorite leagues.";

/// Icon shown on every alert notification
pub const PUSH_ICON_PATH: &str = "/static/icons/icon.png";

/// Wire shape of a push payload; both fields optional
#[derive(Debug, Default, Deserialize)]
struct PushPayload {
    title: Option<String>,
    body: Option<String>,
}

/// Resolved notification content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
}

impl PushNotification {
    /// Build a notification from an optional raw push payload.
    ///
    /// A missing or empty payload yields the default alert. Malformed JSON
    /// is an error; the worker logs it and shows nothing, matching the
    /// original behavior of failing the event.
    pub fn from_payload(raw: Option<&str>) -> Result<Self> {
        let payload = match raw {
            Some(text) if !text.is_empty() => serde_json::from_str::<PushPayload>(text)?,
            _ => PushPayload::default(),
        };

        Ok(Self {
            title: payload.title.unwrap_or_else(|| DEFAULT_PUSH_TITLE.into()),
            body: payload.body.unwrap_or_else(|| DEFAULT_PUSH_BODY.into()),
            icon: PUSH_ICON_PATH.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_title_and_body() {
        let notification =
            PushNotification::from_payload(Some(r#"{"title":"X","body":"Y"}"#)).unwrap();
        assert_eq!(notification.title, "X");
        assert_eq!(notification.body, "Y");
        assert_eq!(notification.icon, PUSH_ICON_PATH);
    }

    #[test]
    fn test_missing_payload_uses_defaults() {
        let notification = PushNotification::from_payload(None).unwrap();
        assert_eq!(notification.title, DEFAULT_PUSH_TITLE);
        assert_eq!(notification.body, DEFAULT_PUSH_BODY);
        assert_eq!(notification.icon, PUSH_ICON_PATH);
    }

    #[test]
    fn test_partial_payload_defaults_missing_fields() {
        let notification = PushNotification::from_payload(Some(r#"{"title":"X"}"#)).unwrap();
        assert_eq!(notification.title, "X");
        assert_eq!(notification.body, DEFAULT_PUSH_BODY);
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let notification = PushNotification::from_payload(Some("")).unwrap();
        assert_eq!(notification.title, DEFAULT_PUSH_TITLE);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(PushNotification::from_payload(Some("not json")).is_err());
    }
}
