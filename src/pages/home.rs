//! Home page: category tabs over the infinitely scrolling story feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The feed itself lives in [`crate::state::feed`]
//! so the scroll listener, the category tabs, and the navbar's category menu
//! all drive the same pagination state; this page owns the listener lifecycle
//! and turns `FeedRequest` claims into HTTP calls.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::flash::push_flash;
use crate::components::story_card::StoryCard;
use crate::net::api;
use crate::state::feed::{FeedCategory, FeedState};
use crate::state::flash::{FlashLevel, FlashState};
use crate::util::scroll;

/// Section class pairing the feed markup with the active category's styles.
fn section_class(category: FeedCategory) -> String {
    format!("stories-section {}-stories", category.as_str())
}

/// Claim and fetch the next feed page. Does nothing while a request is in
/// flight or after the terminal page; `FeedState::begin_load` is the single
/// gate for all three triggers (mount, scroll, category reset).
fn load_next_page(feed: RwSignal<FeedState>) {
    let Some(request) = feed.try_update(FeedState::begin_load).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::fetch_stories(request.page, request.category.as_str()).await {
                Ok(page) => {
                    feed.update(|f| f.apply_page(request.epoch, page));
                }
                Err(err) => {
                    log::warn!("feed page {} load failed: {err}", request.page);
                    feed.update(|f| f.fail_load(request.epoch, err));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Release the claim so native renders never show a stuck spinner.
        feed.update(|f| f.fail_load(request.epoch, "not available on server".to_owned()));
    }
}

/// Switch the feed category from the tab row. A real switch resets the feed
/// (the pristine-feed effect then fetches page 1) and scrolls back to the top.
fn select_category(feed: RwSignal<FeedState>, category: FeedCategory) {
    let changed = feed.try_update(|f| f.select_category(category)).unwrap_or(false);
    if changed {
        scroll::scroll_to_top();
    }
}

/// Toggle a story like in the background and fold the result into the feed.
fn like_story_action(feed: RwSignal<FeedState>, flash: RwSignal<FlashState>, story_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::like_story(story_id).await {
                Ok(resp) => {
                    feed.update(|f| f.apply_story_like(story_id, resp.liked, resp.like_count));
                }
                Err(err) => {
                    log::warn!("story like failed: {err}");
                    push_flash(flash, "Terjadi kesalahan saat menyukai curhatan", FlashLevel::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (feed, flash, story_id);
    }
}

/// Delete a story in the background and drop it from the feed on success.
fn delete_story_action(feed: RwSignal<FeedState>, flash: RwSignal<FlashState>, story_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_story(story_id).await {
                Ok(()) => {
                    feed.update(|f| {
                        let _ = f.remove_story(story_id);
                    });
                    push_flash(flash, "Curhatan berhasil dihapus!", FlashLevel::Success);
                }
                Err(err) => {
                    log::warn!("story delete failed: {err}");
                    push_flash(flash, "Terjadi kesalahan saat menghapus curhatan", FlashLevel::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (feed, flash, story_id);
    }
}

/// Home page with the category tab row and the paginated story grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let flash = expect_context::<RwSignal<FlashState>>();

    // First page of a pristine feed, whether from a fresh mount or a category
    // reset. The recorded error keeps a failing server from hot-looping this.
    Effect::new(move || {
        if feed.get().needs_initial_load() {
            load_next_page(feed);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(window) = web_sys::window() {
            let cb = Closure::wrap(Box::new(move || {
                if let Some((inner_height, scroll_y, body_height)) = scroll::page_metrics() {
                    if scroll::near_bottom(inner_height, scroll_y, body_height) {
                        load_next_page(feed);
                    }
                }
            }) as Box<dyn FnMut()>);

            if window
                .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
                .is_ok()
            {
                on_cleanup(move || {
                    let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                    drop(cb);
                });
            }
        }
    }

    let on_like = Callback::new(move |story_id: i64| like_story_action(feed, flash, story_id));
    let on_delete = Callback::new(move |story_id: i64| delete_story_action(feed, flash, story_id));

    view! {
        <div class="home-page">
            <div class="category-tabs">
                {[FeedCategory::Latest, FeedCategory::Popular]
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class="tab-btn"
                                class:active=move || feed.get().category == category
                                type="button"
                                on:click=move |_| select_category(feed, category)
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class=move || section_class(feed.get().category)>
                <div class="stories-grid" id="stories-container">
                    {move || {
                        feed.get()
                            .stories
                            .iter()
                            .map(|story| {
                                view! {
                                    <StoryCard
                                        story=story.clone()
                                        on_like=on_like
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || feed.get().loading>
                    <div class="loading-indicator">
                        <i class="fas fa-spinner fa-spin"></i>
                        " Memuat cerita lainnya..."
                    </div>
                </Show>

                <Show when=move || {
                    let f = feed.get();
                    !f.has_more && !f.stories.is_empty()
                }>
                    <div class="end-message">"\u{1f389} Anda telah melihat semua cerita!"</div>
                </Show>

                <Show when=move || {
                    let f = feed.get();
                    !f.has_more && f.stories.is_empty()
                }>
                    <div class="empty-message">"Belum ada curhatan di kategori ini."</div>
                </Show>
            </section>
        </div>
    }
}
