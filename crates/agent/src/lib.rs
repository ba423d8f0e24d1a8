//! Campus responder - keyword classification and canned replies
//!
//! This crate turns a free-text chat message into an informational reply
//! about the campus:
//! - Normalizes the message and picks a [`conversation::Topic`] by walking an
//!   ordered keyword rule table (first match wins)
//! - Renders the reply for that topic from the static campus dataset
//!   (`format`)
//!
//! # Key Types
//!
//! - `Responder` - total `&str -> String` entry point (see `responder` module)
//! - `Topic` / `Rule` - the ordered rule table (see `conversation` module)
//!
//! The only impure input is the current hour, used to pick the meal period
//! for dining menus. It is read through the injected `campus_core::Clock`.

pub mod conversation;
pub mod format;
pub mod responder;

pub use conversation::{classify, normalize_text, Rule, Topic, RULES};
pub use responder::{Reply, Responder};
