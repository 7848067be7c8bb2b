//! Stripe.js Interop
//!
//! Bindings to the Stripe.js global loaded by the page's script tag. The
//! embedded checkout widget owns the secret-fetch callback: it decides when
//! to invoke it and handles its own retries, so the closure is handed over
//! for the lifetime of the widget.

#![allow(unsafe_code)]

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

use arb_core::{ClientError, Result};

#[wasm_bindgen]
unsafe extern "C" {
    /// Handle returned by the global `Stripe(...)` factory
    pub type Stripe;

    #[wasm_bindgen(js_name = Stripe)]
    fn stripe_factory(publishable_key: &str) -> Stripe;

    #[wasm_bindgen(method, js_name = initEmbeddedCheckout)]
    fn init_embedded_checkout(this: &Stripe, options: &JsValue) -> Promise;

    /// Embedded checkout widget instance
    pub type EmbeddedCheckout;

    #[wasm_bindgen(method)]
    fn mount(this: &EmbeddedCheckout, selector: &str);
}

/// Initialize the embedded checkout widget and mount it onto `selector`.
///
/// `fetch_client_secret` must resolve to the checkout session's client
/// secret string each time the widget calls it.
pub async fn mount_embedded_checkout(
    publishable_key: &str,
    fetch_client_secret: Closure<dyn FnMut() -> Promise>,
    selector: &str,
) -> Result<()> {
    let stripe = stripe_factory(publishable_key);

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("fetchClientSecret"),
        fetch_client_secret.as_ref(),
    )
    .map_err(interop)?;
    // The widget keeps calling back into this closure; leak it to the page.
    fetch_client_secret.forget();

    let checkout = JsFuture::from(stripe.init_embedded_checkout(&options))
        .await
        .map_err(interop)?;
    checkout.unchecked_into::<EmbeddedCheckout>().mount(selector);

    Ok(())
}

fn interop(value: JsValue) -> ClientError {
    ClientError::Interop(format!("{value:?}"))
}
