//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and story/comment surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod comment_thread;
pub mod flash;
pub mod navbar;
pub mod story_card;
