#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn near_bottom_far_from_end_is_false() {
    // 800px viewport at the top of a 3000px document.
    assert!(!near_bottom(800.0, 0.0, 3000.0));
}

#[test]
fn near_bottom_exactly_at_threshold_is_true() {
    // 800 + 1700 == 3000 - 500
    assert!(near_bottom(800.0, 1700.0, 3000.0));
}

#[test]
fn near_bottom_one_pixel_before_threshold_is_false() {
    assert!(!near_bottom(800.0, 1699.0, 3000.0));
}

#[test]
fn near_bottom_at_document_end_is_true() {
    assert!(near_bottom(800.0, 2200.0, 3000.0));
}

#[test]
fn near_bottom_short_page_is_true_without_scrolling() {
    // Document shorter than the viewport.
    assert!(near_bottom(800.0, 0.0, 600.0));
}

#[test]
fn page_metrics_unavailable_off_browser() {
    assert!(page_metrics().is_none());
}

#[test]
fn scroll_to_top_is_noop_but_callable() {
    scroll_to_top();
}
