//! Client-side state models provided app-wide as `RwSignal` contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern: `feed` drives the paginated home feed,
//! `story` the detail page, `flash` the notification queue, `ui` the navbar
//! chrome, and `auth` the session flag. The structs are plain data with
//! synchronous methods so every transition is unit-testable off the DOM.

pub mod auth;
pub mod feed;
pub mod flash;
pub mod story;
pub mod ui;
