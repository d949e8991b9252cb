//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] — [`ScriptedModel`](llm::ScriptedModel), a
//!   [`ChatModel`](crate::port::outbound::llm::ChatModel) that replays
//!   canned replies and records every call.
//! - [`domain`] — Builders for requests and completion payloads.

pub mod domain;
pub mod llm;
