// ABOUTME: Client library for prdkit
// ABOUTME: Session handling, the HTTP API client, and draft form state

pub mod client;
pub mod error;
pub mod form;
pub mod session;

// Re-export main types for convenience
pub use client::PrdClient;
pub use error::{ClientError, ClientResult};
pub use form::{DraftForm, FormEvent, FormField};
pub use session::Session;
