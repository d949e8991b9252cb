//! LLM adapter modules.
//!
//! Provides implementations of the
//! [`ChatModel`](crate::port::outbound::llm::ChatModel) trait for hosted
//! chat-completion endpoints.

pub mod openai;

pub use openai::ChatCompletions;
