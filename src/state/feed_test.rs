use super::*;

fn make_story(id: i64) -> Story {
    Story {
        id,
        content: format!("curhat {id}"),
        is_anonymous: false,
        image_url: None,
        created_at: "01 Agu 2026 09:30".to_owned(),
        author_name: "budi".to_owned(),
        like_count: 0,
        comment_count: 0,
        user_has_liked: false,
        can_delete: false,
    }
}

fn make_page(ids: &[i64], has_next: bool, next_page: Option<u32>) -> StoriesPage {
    StoriesPage {
        stories: ids.iter().copied().map(make_story).collect(),
        has_next,
        next_page,
        total_pages: 3,
    }
}

// =============================================================
// Default state
// =============================================================

#[test]
fn default_state_is_pristine() {
    let state = FeedState::default();
    assert!(state.stories.is_empty());
    assert_eq!(state.category, FeedCategory::Latest);
    assert_eq!(state.next_page, 1);
    assert!(!state.loading);
    assert!(state.has_more);
    assert!(state.last_error.is_none());
    assert!(state.needs_initial_load());
}

// =============================================================
// FeedCategory
// =============================================================

#[test]
fn category_query_values_match_server() {
    assert_eq!(FeedCategory::Latest.as_str(), "latest");
    assert_eq!(FeedCategory::Popular.as_str(), "popular");
}

#[test]
fn category_labels_are_localized() {
    assert_eq!(FeedCategory::Latest.label(), "Terbaru");
    assert_eq!(FeedCategory::Popular.label(), "Terpopuler");
}

// =============================================================
// begin_load
// =============================================================

#[test]
fn begin_load_claims_first_page() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    assert_eq!(req.page, 1);
    assert_eq!(req.epoch, 0);
    assert_eq!(req.category, FeedCategory::Latest);
    assert!(state.loading);
}

#[test]
fn begin_load_while_loading_returns_none() {
    let mut state = FeedState::default();
    assert!(state.begin_load().is_some());
    assert!(state.begin_load().is_none());
}

#[test]
fn begin_load_after_terminal_page_returns_none() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], false, None));
    assert!(state.begin_load().is_none());
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.fail_load(req.epoch, "boom".to_owned());
    assert!(state.last_error.is_some());

    assert!(state.begin_load().is_some());
    assert!(state.last_error.is_none());
}

// =============================================================
// apply_page
// =============================================================

#[test]
fn apply_page_appends_and_advances() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1, 2], true, Some(2)));

    assert_eq!(state.stories.len(), 2);
    assert_eq!(state.next_page, 2);
    assert!(state.has_more);
    assert!(!state.loading);

    let req = state.begin_load().unwrap();
    assert_eq!(req.page, 2);
    state.apply_page(req.epoch, make_page(&[3], true, Some(3)));
    assert_eq!(state.stories.len(), 3);
    assert_eq!(state.next_page, 3);
}

#[test]
fn apply_page_terminal_stops_pagination() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], false, None));
    assert!(!state.has_more);
    assert!(!state.loading);
}

#[test]
fn apply_page_with_stale_epoch_is_ignored() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    assert!(state.select_category(FeedCategory::Popular));

    state.apply_page(req.epoch, make_page(&[1, 2], true, Some(2)));
    assert!(state.stories.is_empty());
    assert_eq!(state.next_page, 1);
}

// =============================================================
// fail_load
// =============================================================

#[test]
fn fail_load_records_error_and_stops_loading() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.fail_load(req.epoch, "stories request failed: 500".to_owned());
    assert!(!state.loading);
    assert_eq!(state.last_error.as_deref(), Some("stories request failed: 500"));
}

#[test]
fn fail_load_with_stale_epoch_is_ignored() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    assert!(state.select_category(FeedCategory::Popular));

    state.fail_load(req.epoch, "boom".to_owned());
    assert!(state.last_error.is_none());
}

// =============================================================
// select_category
// =============================================================

#[test]
fn select_category_resets_pagination() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1, 2], false, None));

    assert!(state.select_category(FeedCategory::Popular));
    assert!(state.stories.is_empty());
    assert_eq!(state.next_page, 1);
    assert!(state.has_more);
    assert!(!state.loading);
    assert_eq!(state.epoch, 1);
    assert!(state.needs_initial_load());
}

#[test]
fn select_same_category_is_noop() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], true, Some(2)));

    assert!(!state.select_category(FeedCategory::Latest));
    assert_eq!(state.stories.len(), 1);
    assert_eq!(state.epoch, 0);
}

#[test]
fn select_category_unblocks_in_flight_load() {
    let mut state = FeedState::default();
    assert!(state.begin_load().is_some());

    assert!(state.select_category(FeedCategory::Popular));
    let req = state.begin_load().unwrap();
    assert_eq!(req.page, 1);
    assert_eq!(req.epoch, 1);
    assert_eq!(req.category, FeedCategory::Popular);
}

// =============================================================
// needs_initial_load
// =============================================================

#[test]
fn needs_initial_load_false_while_loading() {
    let mut state = FeedState::default();
    assert!(state.begin_load().is_some());
    assert!(!state.needs_initial_load());
}

#[test]
fn needs_initial_load_false_after_first_page() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], true, Some(2)));
    assert!(!state.needs_initial_load());
}

#[test]
fn needs_initial_load_false_after_empty_terminal_page() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[], false, None));
    assert!(!state.needs_initial_load());
}

#[test]
fn needs_initial_load_false_after_failure() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.fail_load(req.epoch, "boom".to_owned());
    assert!(!state.needs_initial_load());
}

// =============================================================
// apply_story_like
// =============================================================

#[test]
fn apply_story_like_updates_matching_story() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1, 2], false, None));

    state.apply_story_like(2, true, 5);
    assert!(!state.stories[0].user_has_liked);
    assert!(state.stories[1].user_has_liked);
    assert_eq!(state.stories[1].like_count, 5);
}

#[test]
fn apply_story_like_unknown_story_is_noop() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], false, None));

    state.apply_story_like(99, true, 5);
    assert!(!state.stories[0].user_has_liked);
}

// =============================================================
// remove_story
// =============================================================

#[test]
fn remove_story_drops_matching_story() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1, 2, 3], false, None));

    assert!(state.remove_story(2));
    assert_eq!(state.stories.len(), 2);
    assert!(state.stories.iter().all(|s| s.id != 2));
}

#[test]
fn remove_story_unknown_returns_false() {
    let mut state = FeedState::default();
    let req = state.begin_load().unwrap();
    state.apply_page(req.epoch, make_page(&[1], false, None));

    assert!(!state.remove_story(99));
    assert_eq!(state.stories.len(), 1);
}
