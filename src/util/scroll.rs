//! Window-scroll helpers for the infinite feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scroll listener needs three window measurements and one threshold
//! check per event. The check is pure so the trigger distance is testable
//! without a DOM; the measurement and smooth-scroll calls are browser-only.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Distance from the document bottom, in pixels, at which the next page load
/// kicks off.
pub const NEAR_BOTTOM_PX: f64 = 500.0;

/// Whether the viewport is within [`NEAR_BOTTOM_PX`] of the document bottom.
#[must_use]
pub fn near_bottom(inner_height: f64, scroll_y: f64, body_height: f64) -> bool {
    inner_height + scroll_y >= body_height - NEAR_BOTTOM_PX
}

/// Current `(viewport height, scroll offset, document height)`, when a
/// browser window is available.
pub fn page_metrics() -> Option<(f64, f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let inner_height = window.inner_height().ok()?.as_f64()?;
        let scroll_y = window.scroll_y().ok()?;
        let body = window.document()?.body()?;
        Some((inner_height, scroll_y, f64::from(body.offset_height())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll an element to the nearest visible position.
#[cfg(feature = "hydrate")]
pub fn reveal(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
