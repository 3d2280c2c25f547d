//! Session flag handed over from the server-rendered page.
//!
//! The server templates set `window.currentUserIsAuthenticated` before the
//! bundle loads; hydration reads it once into [`crate::state::auth`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

/// Read the page-global authentication flag. `false` outside the browser or
/// when the global is missing or not a boolean.
pub fn current_user_is_authenticated() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("currentUserIsAuthenticated"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Send the browser to the login page. Full navigation, not a router jump;
/// the login page is server-rendered.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
