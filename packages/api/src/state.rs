// ABOUTME: Shared application state handed to every handler
// ABOUTME: Holds the PRD store and authentication service behind trait objects

use std::sync::Arc;

use prdkit_security::AuthService;
use prdkit_storage::PrdStore;

#[derive(Clone)]
pub struct AppState {
    pub prds: Arc<dyn PrdStore>,
    pub auth: Arc<dyn AuthService>,
}

impl AppState {
    pub fn new(prds: Arc<dyn PrdStore>, auth: Arc<dyn AuthService>) -> Self {
        Self { prds, auth }
    }
}
