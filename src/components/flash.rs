//! Flash message stack with timed dismissal.
//!
//! DESIGN
//! ======
//! Pushing a message arms a timer against that message's ID; the timer and
//! the close button race through `begin_dismiss`, which only one of them can
//! win. The fade is applied as inline styles the stylesheet transitions on,
//! and the message is removed once the transition has had time to finish.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;

use crate::state::flash::{FlashLevel, FlashState};

/// How long a flash message stays readable before fading.
pub const FLASH_VISIBLE_MS: u64 = 5_000;
/// How long the fade-out transition runs before removal.
pub const FLASH_FADE_MS: u64 = 300;

/// Show a flash message and schedule its automatic dismissal.
pub fn push_flash(flash: RwSignal<FlashState>, text: &str, level: FlashLevel) {
    let text = text.to_owned();
    let Some(id) = flash.try_update(|f| f.push(text, level)) else {
        return;
    };
    schedule_dismiss(flash, id);
}

/// Dismiss a flash message now, playing the same fade as the timer would.
pub fn dismiss_flash(flash: RwSignal<FlashState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        if flash.try_update(|f| f.begin_dismiss(id)) != Some(true) {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_FADE_MS)).await;
            let _ = flash.try_update(|f| f.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = flash.try_update(|f| f.remove(id));
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(flash: RwSignal<FlashState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_VISIBLE_MS)).await;
        if flash.try_update(|f| f.begin_dismiss(id)) != Some(true) {
            return;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_FADE_MS)).await;
        let _ = flash.try_update(|f| f.remove(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(flash: RwSignal<FlashState>, id: u64) {
    let _ = (flash, id);
}

fn flash_message_class(level: FlashLevel) -> String {
    format!("flash-message {}", level.as_str())
}

fn flash_exit_style(leaving: bool) -> Option<&'static str> {
    leaving.then_some("opacity: 0; transform: translateX(100%)")
}

/// Stack of flash messages, oldest on top.
#[component]
pub fn FlashStack() -> impl IntoView {
    let flash = expect_context::<RwSignal<FlashState>>();

    view! {
        <div class="flash-messages">
            {move || {
                flash
                    .get()
                    .messages
                    .iter()
                    .map(|message| {
                        let id = message.id;
                        let class = flash_message_class(message.level);
                        let style = flash_exit_style(message.leaving);
                        let text = message.text.clone();
                        view! {
                            <div class=class style=style>
                                <span>{text}</span>
                                <button class="flash-close" on:click=move |_| dismiss_flash(flash, id)>
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
