//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{CheckoutPage, ReturnPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/plans/checkout/:plan_id") view=CheckoutPage />
                    <Route path=path!("/plans/return") view=ReturnPage />
                </Routes>
            </main>
        </Router>
    }
}
