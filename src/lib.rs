//! Namenest - baby name suggestions from hosted language models.
//!
//! Language models are asked for names as a JSON array, and whatever comes
//! back is treated as untrusted text: it is extracted, repaired, validated
//! and deduplicated before anything reaches the caller. Several model
//! candidates are tried in order, with a stricter prompt on the second
//! attempt against each.
//!
//! # Modules
//!
//! - [`domain`] - Requests, records, vocabularies and scripts
//! - [`application`] - The generation pipeline and its retry policy
//! - [`port`] - The chat-completion contract
//! - [`adapter`] - The HTTP client and the command-line interface
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use namenest::domain::request::{Gender, NameRequest, Origin, Style};
//! use namenest::domain::vocabulary::Vocabulary;
//! use namenest::infrastructure::{bootstrap, config::Config};
//!
//! # async fn demo() -> namenest::error::Result<()> {
//! let config = Config::resolve(None)?;
//! let generator = bootstrap::build_generator(&config, Arc::new(Vocabulary::standard()))?;
//! let request = NameRequest::new(Gender::Girl, Style::Vintage, Origin::Any, 5, vec![])?;
//! for record in generator.generate(&request).await? {
//!     println!("{} - {}", record.name, record.meaning);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
