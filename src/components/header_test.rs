use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counting_callback() -> (Callback<()>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let callback = Callback::new(move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (callback, calls)
}

#[test]
fn dashboard_href_targets_dashboard_route() {
    assert_eq!(DASHBOARD_HREF, "/#/dashboard");
}

#[test]
fn logout_button_click_invokes_callback_once_per_click() {
    let owner = Owner::new();
    owner.with(|| {
        let (logout, calls) = counting_callback();
        let click = logout_click_handler::<()>(Some(logout));

        click(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        click(());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn handle_logout_invokes_callback_directly() {
    let owner = Owner::new();
    owner.with(|| {
        let (logout, calls) = counting_callback();
        handle_logout(Some(logout));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn handle_logout_without_callback_is_noop() {
    handle_logout(None);
    let click = logout_click_handler::<()>(None);
    click(());
    click(());
}

#[cfg(feature = "ssr")]
#[test]
fn renders_single_dashboard_link_without_props() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <Header/> }.to_html());

    assert_eq!(html.matches("<a ").count(), 1);
    assert_eq!(html.matches("href=").count(), 1);
    assert!(html.contains(r#"href="/#/dashboard""#), "unexpected markup: {html}");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_single_logout_button_with_callback() {
    let owner = Owner::new();
    let html = owner.with(|| {
        let (logout, calls) = counting_callback();
        let html = view! { <Header logout=logout/> }.to_html();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        html
    });

    assert_eq!(html.matches("<a ").count(), 1);
    assert_eq!(html.matches("<button").count(), 1);
    assert!(html.contains("Logout"));
    assert!(html.contains(r#"href="/#/dashboard""#), "unexpected markup: {html}");
}
