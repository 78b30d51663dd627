use dioxus::prelude::*;

use crate::Route;
use crate::stores::session::SESSION_STORE;

/// Capability check wrapping protected views. No session present means
/// a redirect to the landing view before anything renders; the
/// originally requested path is not preserved.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let navigator = use_navigator();
    let authenticated = SESSION_STORE.read().is_authenticated();

    use_effect(move || {
        if !SESSION_STORE.read().is_authenticated() {
            navigator.replace(Route::WelcomeView);
        }
    });

    if !authenticated {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}
