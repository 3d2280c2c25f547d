//! Native browser dialogs.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Ask the user to confirm a destructive action. Always `false` outside the
/// browser, so deletes can never fire during server rendering.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
