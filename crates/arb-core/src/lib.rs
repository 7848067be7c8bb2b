//! # arb-core
//!
//! Shared logic for the arb-frontend browser crates: the Stripe embedded
//! checkout initializer, the post-payment return handler, and the push
//! notification handler. Everything here is pure Rust so it can be unit
//! tested on the host; the WASM crates (`arb-web`, `arb-push`) supply the
//! browser glue.
//!
//! The server side (checkout session creation, session status, push
//! delivery) is an external collaborator reached over two fixed endpoints:
//!
//! ```text
//! POST /plans/create-checkout-session   {"plan_id": ...} -> {"clientSecret": ...}
//! GET  /plans/session-status?session_id=<id> -> {"status": ..., "customer_email": ...}
//! ```

mod checkout;
mod error;
mod push;
mod session;

pub use checkout::{
    CheckoutSessionCreated, CreateCheckoutSessionRequest, CREATE_CHECKOUT_SESSION_PATH,
    CSRF_HEADER, plan_id_from_path,
};
pub use error::{ClientError, Result};
pub use push::{PushNotification, DEFAULT_PUSH_BODY, DEFAULT_PUSH_TITLE, PUSH_ICON_PATH};
pub use session::{
    return_action, session_id_from_query, ReturnAction, SessionStatus, SessionStatusResponse,
    CHECKOUT_RETURN_PATH, SESSION_STATUS_PATH,
};
