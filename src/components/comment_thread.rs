//! Comment section for the story-detail page.
//!
//! DESIGN
//! ======
//! Comments nest exactly one level: top-level comments can carry replies,
//! replies are leaves. The open reply form and its draft text are owned by
//! the section, not the items, so they survive the list re-rendering when a
//! like toggles. Posting goes through the server and re-fetches the tree
//! rather than splicing the new comment in locally.

#[cfg(test)]
#[path = "comment_thread_test.rs"]
mod comment_thread_test;

use leptos::prelude::*;

use crate::components::flash::push_flash;
use crate::components::story_card::heart_icon_class;
use crate::net::api;
use crate::net::types::Comment;
use crate::state::auth::AuthState;
use crate::state::flash::{FlashLevel, FlashState};
use crate::state::story::StoryDetailState;
use crate::util::dialog;
use crate::util::session;

fn comment_count_label(count: i64) -> String {
    format!("Komentar ({count})")
}

/// Toggle a comment like in the background and fold the result into state.
fn like_comment_action(detail: RwSignal<StoryDetailState>, flash: RwSignal<FlashState>, comment_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::like_comment(comment_id).await {
                Ok(resp) => {
                    detail.update(|d| {
                        let _ = d.apply_comment_like(comment_id, resp.liked, resp.like_count);
                    });
                }
                Err(err) => {
                    log::warn!("comment like failed: {err}");
                    push_flash(flash, "Terjadi kesalahan saat menyukai komentar", FlashLevel::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (detail, flash, comment_id);
    }
}

/// Delete a comment in the background and drop it from state on success.
fn delete_comment_action(detail: RwSignal<StoryDetailState>, flash: RwSignal<FlashState>, comment_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_comment(comment_id).await {
                Ok(()) => {
                    detail.update(|d| {
                        let _ = d.remove_comment(comment_id);
                    });
                    push_flash(flash, "Komentar berhasil dihapus!", FlashLevel::Success);
                }
                Err(err) => {
                    log::warn!("comment delete failed: {err}");
                    push_flash(flash, "Terjadi kesalahan saat menghapus komentar", FlashLevel::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (detail, flash, comment_id);
    }
}

/// Validate and post a comment or reply, then refresh the detail page.
fn submit_comment(
    story_id: i64,
    parent_id: Option<i64>,
    text: RwSignal<String>,
    open_reply: RwSignal<Option<i64>>,
    busy: RwSignal<bool>,
    detail: RwSignal<StoryDetailState>,
    flash: RwSignal<FlashState>,
) {
    if busy.get() {
        return;
    }
    let content = text.get().trim().to_owned();
    if content.is_empty() {
        push_flash(flash, "Komentar tidak boleh kosong!", FlashLevel::Error);
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::post_comment(story_id, &content, parent_id).await {
                Ok(()) => {
                    text.set(String::new());
                    open_reply.set(None);
                    push_flash(flash, "Komentar berhasil ditambahkan!", FlashLevel::Success);
                    detail.update(|d| d.request_refresh());
                }
                Err(err) => {
                    log::warn!("comment post failed: {err}");
                    push_flash(flash, "Terjadi kesalahan saat mengirim komentar", FlashLevel::Error);
                }
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (story_id, parent_id, content, open_reply, busy, detail);
    }
}

/// Comment list with the top-level comment form.
#[component]
pub fn CommentSection(story_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let detail = expect_context::<RwSignal<StoryDetailState>>();
    let flash = expect_context::<RwSignal<FlashState>>();

    let comment_text = RwSignal::new(String::new());
    let open_reply = RwSignal::new(None::<i64>);
    let reply_text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    view! {
        <section class="comments-section">
            <h3 class="comments-title">
                {move || comment_count_label(detail.get().story.as_ref().map_or(0, |s| s.comment_count))}
            </h3>

            <Show
                when=move || auth.get().authenticated
                fallback=|| {
                    view! {
                        <p class="comment-login-prompt">
                            <a href="/login">"Masuk"</a>
                            " untuk menulis komentar"
                        </p>
                    }
                }
            >
                <form
                    class="comment-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit_comment(story_id, None, comment_text, open_reply, busy, detail, flash);
                    }
                >
                    <textarea
                        placeholder="Tulis komentarmu..."
                        prop:value=move || comment_text.get()
                        on:input=move |ev| comment_text.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn-submit" type="submit" disabled=move || busy.get()>
                        "Kirim"
                    </button>
                </form>
            </Show>

            <div class="comments-list">
                {move || {
                    detail
                        .get()
                        .comments
                        .iter()
                        .map(|comment| {
                            view! {
                                <CommentItem
                                    comment=comment.clone()
                                    story_id=story_id
                                    open_reply=open_reply
                                    reply_text=reply_text
                                    busy=busy
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

/// One top-level comment with its reply form and replies.
#[component]
fn CommentItem(
    comment: Comment,
    story_id: i64,
    open_reply: RwSignal<Option<i64>>,
    reply_text: RwSignal<String>,
    busy: RwSignal<bool>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let detail = expect_context::<RwSignal<StoryDetailState>>();
    let flash = expect_context::<RwSignal<FlashState>>();

    let comment_id = comment.id;
    let liked = comment.user_has_liked;
    let can_delete = comment.can_delete;

    let form_ref = NodeRef::<leptos::html::Div>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    #[cfg(feature = "hydrate")]
    {
        // Bring the reply form into view and focus it once it opens.
        Effect::new(move || {
            if open_reply.get() != Some(comment_id) {
                return;
            }
            let Some(form) = form_ref.get() else {
                return;
            };
            crate::util::scroll::reveal(&form);
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        });
    }

    let on_like_click = move |_| {
        if !auth.get().authenticated {
            session::redirect_to_login();
            return;
        }
        like_comment_action(detail, flash, comment_id);
    };

    let on_reply_click = move |_| {
        if open_reply.get() == Some(comment_id) {
            open_reply.set(None);
        } else {
            reply_text.set(String::new());
            open_reply.set(Some(comment_id));
        }
    };

    let on_cancel_reply = move |_| {
        reply_text.set(String::new());
        open_reply.set(None);
    };

    let on_delete_click = move |_| {
        if dialog::confirm("Hapus komentar ini?") {
            delete_comment_action(detail, flash, comment_id);
        }
    };

    let replies = comment
        .replies
        .iter()
        .map(|reply| view! { <ReplyItem comment=reply.clone() /> })
        .collect::<Vec<_>>();
    let has_replies = !replies.is_empty();

    view! {
        <div class="comment" id=format!("comment-{comment_id}")>
            <div class="comment-header">
                <span class="comment-author">{comment.author_name}</span>
                <span class="comment-time">{comment.created_at}</span>
            </div>
            <div class="comment-content">{comment.content}</div>
            <div class="comment-actions">
                <button class="btn-like" class:liked=liked type="button" on:click=on_like_click>
                    <i class=heart_icon_class(liked)></i>
                    <span class="like-count">{comment.like_count}</span>
                </button>
                <Show when=move || auth.get().authenticated>
                    <button class="btn-reply" type="button" on:click=on_reply_click>
                        <i class="fas fa-reply"></i>
                        " Balas"
                    </button>
                </Show>
                <Show when=move || can_delete>
                    <div class="delete-form">
                        <button
                            class="btn-delete"
                            type="button"
                            aria-label="Hapus komentar"
                            on:click=on_delete_click
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || open_reply.get() == Some(comment_id)>
                <div class="reply-form" id=format!("reply-form-{comment_id}") node_ref=form_ref>
                    <textarea
                        placeholder="Tulis balasanmu..."
                        node_ref=textarea_ref
                        prop:value=move || reply_text.get()
                        on:input=move |ev| reply_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="reply-form-actions">
                        <button
                            class="btn-submit"
                            type="button"
                            disabled=move || busy.get()
                            on:click=move |_| {
                                submit_comment(
                                    story_id,
                                    Some(comment_id),
                                    reply_text,
                                    open_reply,
                                    busy,
                                    detail,
                                    flash,
                                );
                            }
                        >
                            "Kirim"
                        </button>
                        <button class="btn-cancel" type="button" on:click=on_cancel_reply>
                            "Batal"
                        </button>
                    </div>
                </div>
            </Show>

            {has_replies.then(|| view! { <div class="comment-replies">{replies}</div> })}
        </div>
    }
}

/// A reply: like and delete only, no further nesting.
#[component]
fn ReplyItem(comment: Comment) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let detail = expect_context::<RwSignal<StoryDetailState>>();
    let flash = expect_context::<RwSignal<FlashState>>();

    let comment_id = comment.id;
    let liked = comment.user_has_liked;
    let can_delete = comment.can_delete;

    let on_like_click = move |_| {
        if !auth.get().authenticated {
            session::redirect_to_login();
            return;
        }
        like_comment_action(detail, flash, comment_id);
    };

    let on_delete_click = move |_| {
        if dialog::confirm("Hapus komentar ini?") {
            delete_comment_action(detail, flash, comment_id);
        }
    };

    view! {
        <div class="comment comment-reply" id=format!("comment-{comment_id}")>
            <div class="comment-header">
                <span class="comment-author">{comment.author_name}</span>
                <span class="comment-time">{comment.created_at}</span>
            </div>
            <div class="comment-content">{comment.content}</div>
            <div class="comment-actions">
                <button class="btn-like" class:liked=liked type="button" on:click=on_like_click>
                    <i class=heart_icon_class(liked)></i>
                    <span class="like-count">{comment.like_count}</span>
                </button>
                <Show when=move || can_delete>
                    <div class="delete-form">
                        <button
                            class="btn-delete"
                            type="button"
                            aria-label="Hapus komentar"
                            on:click=on_delete_click
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
