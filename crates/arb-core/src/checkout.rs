//! Checkout Session Wire Types
//!
//! Request and response shapes for the embedded-checkout initializer. The
//! widget itself (Stripe Embedded Checkout) renders and retries the secret
//! fetch on its own schedule; this layer only issues the session-create call
//! and hands back the client secret.

use serde::{Deserialize, Serialize};

/// Endpoint that creates a checkout session for a plan
pub const CREATE_CHECKOUT_SESSION_PATH: &str = "/plans/create-checkout-session";

/// CSRF header expected by the server on the session-create POST
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body of the session-create POST
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCheckoutSessionRequest {
    /// Plan being purchased, taken from the final segment of the page path
    pub plan_id: String,
}

/// Successful session-create response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSessionCreated {
    /// Opaque secret handed to the embedded widget; never stored
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Extract the plan id from a page path.
///
/// The checkout page lives at `/plans/checkout/<plan_id>`; the plan id is
/// the final path segment with any trailing slash stripped. Returns `None`
/// for the root path or an empty final segment.
pub fn plan_id_from_path(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_id_from_path() {
        assert_eq!(
            plan_id_from_path("/plans/checkout/3"),
            Some("3".to_string())
        );
        assert_eq!(
            plan_id_from_path("/plans/checkout/pro/"),
            Some("pro".to_string())
        );
    }

    #[test]
    fn test_plan_id_from_root_path() {
        assert_eq!(plan_id_from_path("/"), None);
        assert_eq!(plan_id_from_path(""), None);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(CreateCheckoutSessionRequest {
            plan_id: "3".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"plan_id": "3"}));
    }

    #[test]
    fn test_client_secret_field_is_camel_case() {
        let created: CheckoutSessionCreated =
            serde_json::from_str(r#"{"clientSecret": "cs_test_abc"}"#).unwrap();
        assert_eq!(created.client_secret, "cs_test_abc");
    }
}
