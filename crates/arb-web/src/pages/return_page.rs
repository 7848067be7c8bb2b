//! Payment Return Page
//!
//! Stripe redirects here as `/plans/return?session_id=<id>`. The page asks
//! the server for the session status and either sends the browser back to
//! the checkout flow (session still open) or reveals the success panel
//! with the customer's email (session complete).

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use arb_core::{return_action, session_id_from_query, ClientError, Result, ReturnAction};

use crate::{api, config};

#[component]
pub fn ReturnPage() -> impl IntoView {
    let (completed, set_completed) = signal(false);
    let (customer_email, set_customer_email) = signal(String::new());

    leptos::task::spawn_local(async move {
        if let Err(e) = initialize(set_completed, set_customer_email).await {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "payment return handling failed: {e}"
            )));
        }
    });

    view! {
        <section id="success" class:hidden=move || !completed.get()>
            <p>
                "We appreciate your business! A confirmation email will be sent to "
                <span id="customer-email">{move || customer_email.get()}</span>
                "."
            </p>
            <p>"If you have any questions, please contact support."</p>
        </section>
    }
}

/// Fetch the session status and apply exactly one UI action.
async fn initialize(
    set_completed: WriteSignal<bool>,
    set_customer_email: WriteSignal<String>,
) -> Result<()> {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let session_id = session_id_from_query(&search).ok_or(ClientError::MissingSessionId)?;

    let response = api::session_status(&session_id).await?;
    let site_url = config::site_url()?;

    match return_action(&response, &site_url) {
        ReturnAction::ReturnToCheckout { url } => {
            let window = web_sys::window()
                .ok_or_else(|| ClientError::Interop("no window available".into()))?;
            window
                .location()
                .replace(&url)
                .map_err(|e| ClientError::Interop(format!("{e:?}")))?;
        }
        ReturnAction::ShowSuccess { customer_email } => {
            set_customer_email.set(customer_email);
            set_completed.set(true);
        }
        ReturnAction::Stay => {
            web_sys::console::warn_1(&JsValue::from_str(
                "session status not recognized, leaving page unchanged",
            ));
        }
    }

    Ok(())
}
