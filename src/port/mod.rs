//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems, here the chat-completion endpoint that produces raw name data.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌───────────┐
//! │   CLI   │                                          │ Chat model│
//! │ Adapter │                                          │  Adapter  │
//! └─────────┘                                          └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::llm::ChatModel`] - One request/response round-trip to a model candidate

pub mod outbound;
