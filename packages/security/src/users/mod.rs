// ABOUTME: User account module
// ABOUTME: Provides types and SQLite storage for registered accounts

pub mod storage;
pub mod types;


pub use storage::UserStorage;
pub use types::*;
