//! Story card shared by the feed grid and the detail page.
//!
//! DESIGN
//! ======
//! The card is presentation-only: like and delete clicks are forwarded to the
//! owning page through callbacks so each page can update its own state slice.
//! Guests can see like counts but clicking sends them to the login page.

#[cfg(test)]
#[path = "story_card_test.rs"]
mod story_card_test;

use leptos::prelude::*;

use crate::net::types::Story;
use crate::state::auth::AuthState;
use crate::util::dialog;
use crate::util::session;

/// One story with author line, optional image, body, and action row.
#[component]
pub fn StoryCard(
    story: Story,
    on_like: Callback<i64>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let image_hidden = RwSignal::new(false);

    let story_id = story.id;
    let liked = story.user_has_liked;
    let show_delete = story.can_delete && on_delete.is_some();

    let on_like_click = move |_| {
        if auth.get().authenticated {
            on_like.run(story_id);
        } else {
            session::redirect_to_login();
        }
    };

    let on_delete_click = move |_| {
        if dialog::confirm("Hapus curhatan ini?") {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(story_id);
            }
        }
    };

    view! {
        <div class="story-card" id=format!("story-{story_id}")>
            <div class="story-header">
                <div class="story-author">
                    <span class="author-name">{story.author_name}</span>
                    <span class="story-time">{story.created_at}</span>
                </div>
                <Show when=move || show_delete>
                    <div class="delete-form">
                        <button
                            class="btn-delete"
                            type="button"
                            aria-label="Hapus curhatan"
                            on:click=on_delete_click
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                </Show>
            </div>

            {story
                .image_url
                .map(|src| {
                    view! {
                        <div class="story-image">
                            <img
                                src=src
                                alt="Story image"
                                loading="lazy"
                                style:display=move || if image_hidden.get() { "none" } else { "" }
                                on:error=move |_| image_hidden.set(true)
                            />
                        </div>
                    }
                })}

            <div class="story-content">{story.content}</div>

            <div class="story-actions">
                <div class="action-group">
                    <button class="btn-like" class:liked=liked type="button" on:click=on_like_click>
                        <i class=heart_icon_class(liked)></i>
                        <span class="like-count">{story.like_count}</span>
                    </button>
                    <a class="btn-comment" href=format!("/story/{story_id}")>
                        <i class="fas fa-comment"></i>
                        <span class="comment-count">{story.comment_count}</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Heart icon for a like button: solid once liked, outline otherwise.
#[must_use]
pub fn heart_icon_class(liked: bool) -> &'static str {
    if liked { "fas fa-heart" } else { "far fa-heart" }
}
