//! Root application component and SSR document shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::header::Header;
use crate::state::auth::AuthState;

/// Where the browser lands after logging out.
pub const LOGIN_HREF: &str = "/#/login";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Status line shown under the header.
pub fn session_status(state: &AuthState) -> String {
    if state.signed_in { "Signed in".to_owned() } else { "Signed out".to_owned() }
}

/// Logout capability handed to the header.
///
/// In the browser the API call runs first, then the session is dropped and the
/// page moves to the login route. Elsewhere only the local state changes.
pub fn logout_callback(auth: RwSignal<AuthState>) -> Callback<()> {
    Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout request failed: {e}");
            }
            auth.update(AuthState::sign_out);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(LOGIN_HREF);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        auth.update(AuthState::sign_out);
    })
}

/// Page body: the header wired to the auth context, plus the session line.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let on_logout = logout_callback(auth);

    view! {
        <Header logout=on_logout/>
        <main class="catalog-page">
            <p class="catalog-page__session">{move || auth.with(session_status)}</p>
        </main>
    }
}

/// Root application component.
///
/// Owns the auth state and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-ui.css"/>
        <Title text="API Catalog"/>

        <CatalogPage/>
    }
}
