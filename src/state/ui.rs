//! Navbar chrome state: dropdown menus, mobile search, dark mode.
//!
//! DESIGN
//! ======
//! Only one dropdown can be open at a time, so the open menu is a single
//! `Option` instead of per-menu booleans. A document-level click closes
//! everything; the toggles stop propagation to stay open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dropdown menus in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenu {
    /// Category picker (Terbaru / Terpopuler).
    Categories,
    /// Account menu (profile or login links).
    Account,
}

/// Transient navbar state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Currently open dropdown, if any.
    pub open_menu: Option<NavMenu>,
    /// Whether the mobile search form is expanded.
    pub mobile_search_open: bool,
    /// Whether dark mode is active.
    pub dark_mode: bool,
}

impl UiState {
    /// Toggle a dropdown. Opening one closes whichever other menu was open.
    pub fn toggle_menu(&mut self, menu: NavMenu) {
        if self.open_menu == Some(menu) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(menu);
        }
    }

    /// Close any open dropdown.
    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    /// Toggle the mobile search form. Returns `true` when it just opened.
    pub fn toggle_mobile_search(&mut self) -> bool {
        self.mobile_search_open = !self.mobile_search_open;
        self.mobile_search_open
    }

    /// Collapse the mobile search form.
    pub fn close_mobile_search(&mut self) {
        self.mobile_search_open = false;
    }
}
