//! Session Status and Return Transitions
//!
//! After Stripe redirects back to `/plans/return?session_id=<id>`, the
//! return page asks the server for the session status and performs exactly
//! one of two terminal UI actions: back to checkout while the session is
//! still open, or reveal the success panel once it is complete.

use serde::{Deserialize, Serialize};

/// Endpoint that reports the status of a checkout session
pub const SESSION_STATUS_PATH: &str = "/plans/session-status";

/// Path the return page redirects back to while a session is still open
pub const CHECKOUT_RETURN_PATH: &str = "/plans/checkout";

/// Checkout session status as reported by the server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Session created but payment not finalized
    Open,
    /// Payment finished; subscription is active
    Complete,
    /// Any status outside the two enumerated values
    #[serde(other)]
    Unknown,
}

/// Response of the session-status endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub status: SessionStatus,
    pub customer_email: String,
}

/// UI action the return page takes for a session status
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnAction {
    /// Session still open: send the browser back to the checkout flow
    ReturnToCheckout { url: String },
    /// Session complete: reveal the success panel with the customer email
    ShowSuccess { customer_email: String },
    /// Unrecognized status: leave the page untouched
    Stay,
}

/// Decide the return-page action for a status response.
///
/// Pure and idempotent: the same response always yields the same action.
pub fn return_action(response: &SessionStatusResponse, site_url: &str) -> ReturnAction {
    match response.status {
        SessionStatus::Open => ReturnAction::ReturnToCheckout {
            url: format!("{}{}", site_url.trim_end_matches('/'), CHECKOUT_RETURN_PATH),
        },
        SessionStatus::Complete => ReturnAction::ShowSuccess {
            customer_email: response.customer_email.clone(),
        },
        SessionStatus::Unknown => {
            tracing::warn!("unrecognized session status, leaving return page untouched");
            ReturnAction::Stay
        }
    }
}

/// Extract the `session_id` value from a URL query string.
///
/// Accepts the raw `location.search` value with or without the leading `?`.
pub fn session_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "session_id")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_response() -> SessionStatusResponse {
        serde_json::from_str(r#"{"status": "open", "customer_email": ""}"#).unwrap()
    }

    fn complete_response() -> SessionStatusResponse {
        serde_json::from_str(r#"{"status": "complete", "customer_email": "a@b.com"}"#).unwrap()
    }

    #[test]
    fn test_open_redirects_to_checkout() {
        let action = return_action(&open_response(), "https://example.com");
        assert_eq!(
            action,
            ReturnAction::ReturnToCheckout {
                url: "https://example.com/plans/checkout".into()
            }
        );
    }

    #[test]
    fn test_open_with_trailing_slash_site_url() {
        let action = return_action(&open_response(), "https://example.com/");
        assert_eq!(
            action,
            ReturnAction::ReturnToCheckout {
                url: "https://example.com/plans/checkout".into()
            }
        );
    }

    #[test]
    fn test_complete_shows_success_with_email() {
        let action = return_action(&complete_response(), "https://example.com");
        assert_eq!(
            action,
            ReturnAction::ShowSuccess {
                customer_email: "a@b.com".into()
            }
        );
    }

    #[test]
    fn test_unknown_status_is_noop() {
        let response: SessionStatusResponse =
            serde_json::from_str(r#"{"status": "expired", "customer_email": ""}"#).unwrap();
        assert_eq!(response.status, SessionStatus::Unknown);
        assert_eq!(
            return_action(&response, "https://example.com"),
            ReturnAction::Stay
        );
    }

    #[test]
    fn test_return_action_is_idempotent() {
        let response = complete_response();
        let first = return_action(&response, "https://example.com");
        let second = return_action(&response, "https://example.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_session_id_from_query() {
        assert_eq!(
            session_id_from_query("?session_id=cs_test_123"),
            Some("cs_test_123".to_string())
        );
        assert_eq!(
            session_id_from_query("foo=bar&session_id=cs_test_123"),
            Some("cs_test_123".to_string())
        );
        assert_eq!(session_id_from_query("?foo=bar"), None);
        assert_eq!(session_id_from_query(""), None);
    }
}
