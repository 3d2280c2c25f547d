//! Top navigation bar: brand, search, dropdown menus, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once above the router outlet. Dropdown open state
//! lives in [`crate::state::ui`] so the app-level document-click listener can
//! close menus from outside the component tree. Search submits to the
//! server-rendered `/search` page as a plain GET form.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::feed::{FeedCategory, FeedState};
use crate::state::ui::{NavMenu, UiState};
use crate::util::theme;

/// Entries in the account dropdown as `(href, label)` pairs.
fn account_links(authenticated: bool) -> Vec<(&'static str, &'static str)> {
    if authenticated {
        vec![
            ("/profile", "Profil"),
            ("/notifications", "Notifikasi"),
            ("/logout", "Keluar"),
        ]
    } else {
        vec![("/login", "Masuk"), ("/register", "Daftar")]
    }
}

/// Site-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let search_input_ref = NodeRef::<leptos::html::Input>::new();
    let mobile_input_ref = NodeRef::<leptos::html::Input>::new();

    // Picking a category closes the menu, resets the feed, and heads home
    // where the feed lives.
    let choose_category = {
        let navigate = use_navigate();
        move |category: FeedCategory| {
            ui.update(|u| u.close_menus());
            feed.update(|f| {
                let _ = f.select_category(category);
            });
            navigate("/", NavigateOptions::default());
        }
    };

    #[cfg(feature = "hydrate")]
    {
        // Focus the desktop search box on load unless it already has a query.
        Effect::new(move || {
            if let Some(input) = search_input_ref.get() {
                if input.value().is_empty() {
                    let _ = input.focus();
                }
            }
        });

        // Focus the mobile search box whenever the form opens.
        Effect::new(move || {
            if ui.get().mobile_search_open {
                if let Some(input) = mobile_input_ref.get() {
                    let _ = input.focus();
                }
            }
        });
    }

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a class="nav-brand" href="/">
                    <i class="fas fa-comment-dots"></i>
                    " Curhatin"
                </a>

                <form class="search-form" action="/search" method="get">
                    <input
                        class="search-input"
                        type="text"
                        name="q"
                        placeholder="Cari curhatan..."
                        node_ref=search_input_ref
                    />
                    <button class="search-btn" type="submit" aria-label="Cari">
                        <i class="fas fa-search"></i>
                    </button>
                </form>

                <button
                    class="mobile-search-toggle"
                    type="button"
                    aria-label="Cari"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        ui.update(|u| {
                            u.toggle_mobile_search();
                        });
                    }
                >
                    <i class="fas fa-search"></i>
                </button>

                <div class="nav-menu">
                    <a class="nav-link" href="/">"Beranda"</a>

                    <div class="nav-dropdown">
                        <button
                            class="nav-dropdown-btn"
                            type="button"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                ui.update(|u| u.toggle_menu(NavMenu::Categories));
                            }
                        >
                            "Kategori " <i class="fas fa-caret-down"></i>
                        </button>
                        <div
                            class="nav-dropdown-content"
                            class:show=move || ui.get().open_menu == Some(NavMenu::Categories)
                            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                        >
                            {[FeedCategory::Latest, FeedCategory::Popular]
                                .into_iter()
                                .map(|category| {
                                    let choose_category = choose_category.clone();
                                    view! {
                                        <button
                                            class="nav-dropdown-link"
                                            type="button"
                                            on:click=move |_| choose_category(category)
                                        >
                                            {category.label()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <a class="nav-link" href="/post">"Curhat"</a>

                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        type="button"
                        aria-label="Ganti tema"
                        on:click=move |_| {
                            ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
                        }
                    >
                        <i class=move || theme::icon_class(ui.get().dark_mode)></i>
                    </button>

                    <div class="nav-dropdown">
                        <button
                            class="nav-dropdown-btn"
                            type="button"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                ui.update(|u| u.toggle_menu(NavMenu::Account));
                            }
                        >
                            <i class="fas fa-user"></i>
                            " Akun " <i class="fas fa-caret-down"></i>
                        </button>
                        <div
                            class="nav-dropdown-content"
                            class:show=move || ui.get().open_menu == Some(NavMenu::Account)
                            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                        >
                            {move || {
                                account_links(auth.get().authenticated)
                                    .into_iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <a class="nav-dropdown-link" href=href>
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                </div>
            </div>

            <form
                class="mobile-search-form"
                class:active=move || ui.get().mobile_search_open
                action="/search"
                method="get"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <input
                    type="text"
                    name="q"
                    placeholder="Cari curhatan..."
                    node_ref=mobile_input_ref
                />
                <button class="search-btn" type="submit" aria-label="Cari">
                    <i class="fas fa-search"></i>
                </button>
            </form>
        </nav>
    }
}
