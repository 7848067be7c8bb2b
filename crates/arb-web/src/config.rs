//! Page Configuration
//!
//! Configuration the server embeds into each page as named meta tags. The
//! CSRF token, site base URL, and Stripe publishable key are read from
//! three distinct tags so no value is overloaded with two meanings.

use arb_core::{ClientError, Result};

/// Meta tag carrying the CSRF token for state-changing requests
pub const CSRF_META: &str = "csrf-token";

/// Meta tag carrying the site base URL used for redirects
pub const SITE_URL_META: &str = "site-url";

/// Meta tag carrying the Stripe publishable key
pub const STRIPE_KEY_META: &str = "stripe-publishable-key";

/// Read the content of a named meta tag from the live document.
pub fn meta_content(name: &'static str) -> Result<String> {
    let selector = format!("meta[name=\"{name}\"]");
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(&selector).ok().flatten())
        .and_then(|element| element.get_attribute("content"))
        .ok_or(ClientError::MissingMeta(name))
}

/// CSRF token for the checkout session POST.
pub fn csrf_token() -> Result<String> {
    meta_content(CSRF_META)
}

/// Site base URL for the return-to-checkout redirect.
pub fn site_url() -> Result<String> {
    meta_content(SITE_URL_META)
}

/// Publishable key handed to the Stripe.js factory.
pub fn stripe_publishable_key() -> Result<String> {
    meta_content(STRIPE_KEY_META)
}
