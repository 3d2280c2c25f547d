//! Networking modules for the JSON/form endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls, `types` defines the wire schema both sides
//! agree on. All requests are same-origin; the session cookie rides along.

pub mod api;
pub mod types;
