//! Driven adapters.

pub mod llm;
