//! Inbound adapters: page rendering, UI events, and event scripts.

pub mod events;
pub mod html;
pub mod script;
