//! Story-detail page: one story, its comment tree, and the comment forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route parameter names the story; this page fetches it as JSON, renders
//! the same card the feed uses, and mounts the comment section. Posting a
//! comment bumps `refresh_seq` in [`crate::state::story`], which this page
//! watches to re-fetch the tree.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::comment_thread::CommentSection;
use crate::components::flash::push_flash;
use crate::components::story_card::StoryCard;
use crate::net::api;
use crate::state::flash::{FlashLevel, FlashState};
use crate::state::story::StoryDetailState;

/// Parse the `:id` route parameter. Server IDs are positive integers; any
/// other path segment renders the not-found fallback.
fn parse_story_id(raw: Option<String>) -> Option<i64> {
    raw?.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Fetch the story detail and fold it (or the failure) into state.
fn load_detail(detail: RwSignal<StoryDetailState>, story_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::fetch_story_detail(story_id).await {
                Ok(fetched) => {
                    detail.update(|d| d.apply_detail(fetched));
                }
                Err(err) => {
                    log::warn!("story {story_id} load failed: {err}");
                    detail.update(|d| d.fail_load(story_id, err));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        detail.update(|d| d.fail_load(story_id, "not available on server".to_owned()));
    }
}

/// Toggle the displayed story's like and fold the result into state.
fn like_story_action(detail: RwSignal<StoryDetailState>, flash: RwSignal<FlashState>, story_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::like_story(story_id).await {
                Ok(resp) => {
                    detail.update(|d| d.apply_story_like(story_id, resp.liked, resp.like_count));
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
        let _ = (detail, flash, story_id);
    }
}

/// Delete the displayed story, then leave for the feed since there is nothing
/// left to show here.
fn delete_story_action(
    flash: RwSignal<FlashState>,
    navigate: impl Fn(&str, NavigateOptions) + Clone + 'static,
    story_id: i64,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_story(story_id).await {
                Ok(()) => {
                    push_flash(flash, "Curhatan berhasil dihapus!", FlashLevel::Success);
                    navigate("/", NavigateOptions::default());
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
        let _ = (flash, navigate, story_id);
    }
}

/// Story-detail page for the `/story/:id` route.
#[component]
pub fn StoryPage() -> impl IntoView {
    let detail = expect_context::<RwSignal<StoryDetailState>>();
    let flash = expect_context::<RwSignal<FlashState>>();

    let params = use_params_map();
    let story_id = Memo::new(move |_| parse_story_id(params.read().get("id")));

    // Fetch on mount, on navigation to another story, and on refresh requests
    // after a comment posts. The fetched marker keeps the effect from
    // re-firing on its own state writes.
    let fetched = StoredValue::new(None::<(i64, u64)>);
    Effect::new(move || {
        let Some(id) = story_id.get() else {
            return;
        };
        let seq = detail.with(|d| d.refresh_seq);
        if fetched.get_value() == Some((id, seq)) {
            return;
        }
        fetched.set_value(Some((id, seq)));
        detail.update(|d| d.begin_load(id));
        load_detail(detail, id);
    });

    let on_like = Callback::new(move |id: i64| like_story_action(detail, flash, id));
    let on_delete = {
        let navigate = use_navigate();
        Callback::new(move |id: i64| delete_story_action(flash, navigate.clone(), id))
    };

    view! {
        <div class="story-detail-page">
            <a class="back-link" href="/">
                <i class="fas fa-arrow-left"></i>
                " Kembali"
            </a>

            {move || {
                let state = detail.get();
                match (story_id.get(), state.story.clone()) {
                    (Some(_), Some(story)) => {
                        let sid = story.id;
                        view! {
                            <StoryCard story=story on_like=on_like on_delete=on_delete />
                            <CommentSection story_id=sid />
                        }
                            .into_any()
                    }
                    (Some(_), None) if state.loading => {
                        view! {
                            <div class="loading-indicator">
                                <i class="fas fa-spinner fa-spin"></i>
                                " Memuat curhatan..."
                            </div>
                        }
                            .into_any()
                    }
                    _ => {
                        view! {
                            <div class="not-found">
                                <h2>"Curhatan tidak ditemukan"</h2>
                                <p>"Curhatan ini mungkin sudah dihapus."</p>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
