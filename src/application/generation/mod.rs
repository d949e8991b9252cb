//! Name generation pipeline.
//!
//! A request flows through these stages:
//!
//! 1. [`prompt`] builds the chat messages for the current attempt.
//! 2. The [`ChatModel`](crate::port::outbound::llm::ChatModel) port returns
//!    raw completion text.
//! 3. [`extract`] recovers a JSON array, or [`fallback`] scans the text
//!    line by line.
//! 4. [`normalize`] repairs and filters the items using [`sanitize`].
//! 5. [`policy`] decides whether to accept, retry, or move on, and
//!    [`orchestrator`] drives the loop.

pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod orchestrator;
pub mod policy;
pub mod prompt;
pub mod sanitize;

pub use normalize::{Normalizer, RawItem};
pub use orchestrator::{records_from_completion, Generator};
pub use policy::RetryPolicy;
