//! Core domain types for name generation.
//!
//! - [`request`] - Validated generation requests and the boundary contract
//! - [`record`] - Name records and result sets
//! - [`vocabulary`] - Origin lists and disallowed tokens
//! - [`script`] - Native writing systems and their code point ranges
//! - [`error`] - Request validation errors

pub mod error;
pub mod record;
pub mod request;
pub mod script;
pub mod vocabulary;

pub use error::DomainError;
pub use record::{NameRecord, ResultSet};
pub use request::{Gender, NameRequest, Origin, RawNameRequest, Style};
pub use script::Script;
pub use vocabulary::Vocabulary;
