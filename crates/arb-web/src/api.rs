//! API Client

use arb_core::{
    CheckoutSessionCreated, ClientError, CreateCheckoutSessionRequest, Result,
    SessionStatusResponse, CREATE_CHECKOUT_SESSION_PATH, CSRF_HEADER, SESSION_STATUS_PATH,
};

/// Absolute base for API calls, taken from the page origin.
///
/// reqwest only accepts absolute URLs, so every endpoint path is resolved
/// against the origin the page was served from.
fn api_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Join an endpoint path onto an origin, yielding an absolute URL.
fn endpoint_url(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

/// Create a checkout session for a plan and return its client secret.
///
/// Issues exactly one POST per call; the embedded widget decides when and
/// how often to call this.
pub async fn create_checkout_session(plan_id: &str, csrf_token: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint_url(&api_origin(), CREATE_CHECKOUT_SESSION_PATH))
        .header(CSRF_HEADER, csrf_token)
        .json(&CreateCheckoutSessionRequest {
            plan_id: plan_id.to_string(),
        })
        .send()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ClientError::Http(format!(
            "checkout session create returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;
    let created: CheckoutSessionCreated = serde_json::from_str(&body)?;

    Ok(created.client_secret)
}

/// Fetch the status of a checkout session.
pub async fn session_status(session_id: &str) -> Result<SessionStatusResponse> {
    let client = reqwest::Client::new();

    let response = client
        .get(endpoint_url(&api_origin(), SESSION_STATUS_PATH))
        .query(&[("session_id", session_id)])
        .send()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ClientError::Http(format!(
            "session status returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_are_absolute() {
        let url = endpoint_url("https://example.com", CREATE_CHECKOUT_SESSION_PATH);
        assert_eq!(url, "https://example.com/plans/create-checkout-session");
        assert!(url::Url::parse(&url).is_ok());
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash_origin() {
        let url = endpoint_url("https://example.com/", SESSION_STATUS_PATH);
        assert_eq!(url, "https://example.com/plans/session-status");
    }

    #[test]
    fn test_bare_endpoint_path_is_not_a_usable_url() {
        assert!(url::Url::parse(CREATE_CHECKOUT_SESSION_PATH).is_err());
        assert!(url::Url::parse(SESSION_STATUS_PATH).is_err());
    }

    #[test]
    fn test_decode_failure_maps_to_json_error() {
        let err = serde_json::from_str::<CheckoutSessionCreated>("not json")
            .map_err(ClientError::from)
            .unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
