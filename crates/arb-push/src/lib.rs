//! arb-frontend Push Worker
//!
//! WASM service-worker module that displays arbitrage alert notifications.
//! The worker's JS glue initializes the module and calls
//! [`init_push_listener`] once at worker start; from then on every push
//! event from the server becomes a system notification.
//!
//! ```javascript
//! import init, { init_push_listener } from './arb_push.js';
//!
//! self.addEventListener('install', (event) => {
//!   event.waitUntil(init().then(() => init_push_listener()));
//! });
//! ```

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{NotificationOptions, PushEvent, ServiceWorkerGlobalScope};

use arb_core::PushNotification;

/// Register the push listener on the worker's global scope.
///
/// Call once per worker context. Errors if the module is not running
/// inside a service worker.
#[wasm_bindgen]
pub fn init_push_listener() -> Result<(), JsValue> {
    let scope: ServiceWorkerGlobalScope = js_sys::global()
        .dyn_into()
        .map_err(|_| JsValue::from_str("not running in a service worker scope"))?;

    let handler_scope = scope.clone();
    let on_push = Closure::wrap(Box::new(move |event: PushEvent| {
        handle_push(&handler_scope, &event);
    }) as Box<dyn FnMut(PushEvent)>);

    scope.add_event_listener_with_callback("push", on_push.as_ref().unchecked_ref())?;
    // The listener lives for the worker's lifetime.
    on_push.forget();

    Ok(())
}

/// Turn one push event into a notification display request.
///
/// The event is held open via `waitUntil` until the display request
/// settles. A payload that fails to decode is logged and dropped without
/// showing anything.
fn handle_push(scope: &ServiceWorkerGlobalScope, event: &PushEvent) {
    let raw = event.data().map(|data| data.text());

    let notification = match PushNotification::from_payload(raw.as_deref()) {
        Ok(notification) => notification,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("push payload rejected: {e}")));
            return;
        }
    };

    let options = NotificationOptions::new();
    options.set_body(&notification.body);
    options.set_icon(&notification.icon);

    match scope
        .registration()
        .show_notification_with_options(&notification.title, &options)
    {
        Ok(promise) => {
            if let Err(e) = event.wait_until(&promise) {
                web_sys::console::error_1(&e);
            }
        }
        Err(e) => web_sys::console::error_1(&e),
    }
}
