// ABOUTME: Authenticated client session
// ABOUTME: Holds the bearer credential and identity that scope every store request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prdkit_core::UserIdentity;

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub identity: UserIdentity,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Owner id attached to records created through this session
    pub fn owner_id(&self) -> &str {
        &self.identity.id
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Bearer token, or `SessionExpired` once the credential has lapsed
    pub(crate) fn bearer(&self) -> ClientResult<&str> {
        if self.is_expired_at(Utc::now()) {
            return Err(ClientError::SessionExpired);
        }
        Ok(&self.token)
    }
}
