//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app hydrates into the host page's `<body>`. Shared state lives here as
//! `RwSignal` contexts so the navbar, the flash stack, and both routes read
//! the same models. The document-level click listener that closes dropdowns
//! also lives here, above any single component.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash::FlashStack;
use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, story::StoryPage};
use crate::state::auth::AuthState;
use crate::state::feed::FeedState;
use crate::state::flash::FlashState;
use crate::state::story::StoryDetailState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, applies the saved theme, and sets up
/// client-side routing for the feed and story-detail screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let feed = RwSignal::new(FeedState::default());
    let detail = RwSignal::new(StoryDetailState::default());
    let flash = RwSignal::new(FlashState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(feed);
    provide_context(detail);
    provide_context(flash);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::util::session;
        use crate::util::theme;

        // The host page sets the session flag before the bundle loads.
        auth.set(AuthState {
            authenticated: session::current_user_is_authenticated(),
        });

        let dark = theme::read_preference();
        theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        // Any click that bubbles up to the document closes the navbar
        // dropdowns and the mobile search; the toggles and the dropdown
        // panels stop propagation so their own clicks never get here.
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                ui.update(|u| {
                    u.close_menus();
                    u.close_mobile_search();
                });
            }) as Box<dyn FnMut(web_sys::Event)>);

            if document
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .is_ok()
            {
                on_cleanup(move || {
                    let _ = document.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
                    drop(cb);
                });
            }
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/curhatin-client.css"/>
        <Title text="Curhatin"/>

        <Router>
            <Navbar/>
            <FlashStack/>
            <main class="main-content">
                <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("story"), ParamSegment("id")) view=StoryPage/>
                </Routes>
            </main>
        </Router>
    }
}
