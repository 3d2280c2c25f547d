//! Flash-message queue shown above the page content.
//!
//! DESIGN
//! ======
//! Messages carry stable IDs so the dismissal timers armed at push time can
//! target exactly the message they were started for, even after earlier
//! messages are gone. `leaving` drives the fade-out styling; the actual
//! removal happens one animation beat later.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Severity of a flash message; maps onto the stylesheet's variant classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Success,
    Error,
}

impl FlashLevel {
    /// CSS class suffix for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One flash message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    /// Stable handle for dismissal.
    pub id: u64,
    /// Message text, already localized.
    pub text: String,
    /// Severity, for styling.
    pub level: FlashLevel,
    /// True once the fade-out has started.
    pub leaving: bool,
}

/// Queue of visible flash messages, oldest first.
#[derive(Clone, Debug, Default)]
pub struct FlashState {
    pub messages: Vec<Flash>,
    next_id: u64,
}

impl FlashState {
    /// Append a message and return its ID for later dismissal.
    pub fn push(&mut self, text: String, level: FlashLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Flash { id, text, level, leaving: false });
        id
    }

    /// Start the fade-out for a message. Returns `false` when the message is
    /// already leaving or gone, so duplicate timers and close clicks collapse
    /// into a single removal.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) if !message.leaving => {
                message.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Drop a message outright. Returns whether it was still present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }
}
