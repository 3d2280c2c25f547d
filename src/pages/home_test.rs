use super::*;

#[test]
fn section_class_names_the_active_category() {
    assert_eq!(section_class(FeedCategory::Latest), "stories-section latest-stories");
    assert_eq!(section_class(FeedCategory::Popular), "stories-section popular-stories");
}

// Native builds have no HTTP path, so a claimed page load must settle back
// into a failed (non-loading) state instead of wedging the spinner.
#[cfg(not(feature = "hydrate"))]
mod native {
    use super::*;
    use crate::state::feed::FeedState;
    use leptos::prelude::*;

    #[test]
    fn load_next_page_releases_the_claim_without_a_browser() {
        let feed = RwSignal::new(FeedState::default());
        load_next_page(feed);
        let state = feed.get_untracked();
        assert!(!state.loading);
        assert!(state.last_error.is_some());
    }
}
