//! Checkout Page
//!
//! Renders the mount region for the Stripe embedded checkout widget and
//! kicks off its initialization. The plan being purchased is the final
//! segment of the page path (`/plans/checkout/<plan_id>`).

use js_sys::Promise;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use arb_core::{plan_id_from_path, ClientError, Result};

use crate::{api, config, stripe};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    leptos::task::spawn_local(async {
        if let Err(e) = initialize().await {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "checkout initialization failed: {e}"
            )));
        }
    });

    view! {
        <div class="checkout-page">
            <div id="checkout"></div>
        </div>
    }
}

/// Build the secret-fetch callback and hand it to the embedded widget.
async fn initialize() -> Result<()> {
    let publishable_key = config::stripe_publishable_key()?;
    let csrf_token = config::csrf_token()?;

    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    let plan_id = plan_id_from_path(&path).ok_or(ClientError::MissingPlanId)?;

    let fetch_client_secret = Closure::wrap(Box::new(move || {
        let plan_id = plan_id.clone();
        let csrf_token = csrf_token.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            api::create_checkout_session(&plan_id, &csrf_token)
                .await
                .map(|secret| JsValue::from_str(&secret))
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }) as Box<dyn FnMut() -> Promise>);

    stripe::mount_embedded_checkout(&publishable_key, fetch_client_secret, "#checkout").await
}
