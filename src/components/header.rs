//! Page header with the dashboard link and the logout control.
//!
//! DESIGN
//! ======
//! The header owns no state. Logout is a capability injected by the owning
//! view as an optional callback; the header only forwards activations to it.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

/// Navigation target of the header link.
pub const DASHBOARD_HREF: &str = "/#/dashboard";

/// Forward a logout activation to the owner's callback, if one was supplied.
pub fn handle_logout(logout: Option<Callback<()>>) {
    if let Some(logout) = logout {
        logout.run(());
    }
}

/// Click handler wired to the logout button.
///
/// Generic over the event type so the wiring can be exercised without a DOM.
pub fn logout_click_handler<E: 'static>(logout: Option<Callback<()>>) -> impl Fn(E) + Send + Sync + 'static {
    move |_| handle_logout(logout)
}

/// Catalog header: title link back to the dashboard and a logout button.
#[component]
pub fn Header(#[prop(optional)] logout: Option<Callback<()>>) -> impl IntoView {
    let on_logout = logout_click_handler::<leptos::ev::MouseEvent>(logout);

    view! {
        <header class="header">
            <a class="header__home" href=DASHBOARD_HREF title="Back to dashboard">
                <span class="header__title">"API Catalog"</span>
            </a>

            <span class="header__spacer"></span>

            <button
                class="btn header__logout"
                on:click=on_logout
                title="Logout"
            >
                "Logout"
            </button>
        </header>
    }
}
