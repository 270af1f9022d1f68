// ABOUTME: Core types, template catalog, and document assembler for prdkit
// ABOUTME: Foundational package shared by storage, security, api, client, and cli

pub mod assembler;
pub mod catalog;
pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{NewPrd, PrdDraft, PrdFields, PrdRecord, UserIdentity};

// Re-export the catalog
pub use catalog::{find_template, list_templates, TemplateCategory, TemplateEntry};

// Re-export the assembler entry points
pub use assembler::{assemble, assemble_at};

// Re-export constants
pub use constants::{default_database_path, prdkit_dir};

// Re-export utilities
pub use utils::generate_record_id;

// Re-export validation
pub use validation::{require_present, ValidationError};
