// ABOUTME: HTTP API client for communicating with the prdkit server
// ABOUTME: Wraps signup, login, PRD create/list, and the template catalog

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use prdkit_core::{PrdDraft, PrdFields, PrdRecord, TemplateEntry, UserIdentity};

use crate::error::{ClientError, ClientResult};
use crate::session::Session;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    user: UserIdentity,
    token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupData {
    user_id: String,
}

#[derive(Deserialize)]
struct CreatedData {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRecordBody<'a> {
    owner_id: &'a str,
    #[serde(flatten)]
    draft: &'a PrdDraft,
}

/// HTTP API client for the prdkit server
#[derive(Debug, Clone)]
pub struct PrdClient {
    client: Client,
    base_url: String,
}

impl PrdClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check server health
    pub async fn health_check(&self) -> ClientResult<bool> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        Ok(response.status().is_success())
    }

    /// Register an account and return its user id
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ClientResult<String> {
        debug!("Signing up {}", email);

        let request = self.client.post(self.url("/api/auth/signup")).json(
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        );
        let data: SignupData = Self::send(request).await?;
        Ok(data.user_id)
    }

    /// Log in and start a session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        debug!("Logging in {}", email);

        let request = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        let data: LoginData = Self::send(request).await?;

        Ok(Session {
            identity: data.user,
            token: data.token,
            expires_at: data.expires_at,
        })
    }

    /// Save an assembled draft under the session's identity
    pub async fn create_record(&self, session: &Session, draft: &PrdDraft) -> ClientResult<String> {
        let body = CreateRecordBody {
            owner_id: session.owner_id(),
            draft,
        };
        let request = self
            .client
            .post(self.url("/api/prds"))
            .bearer_auth(session.bearer()?)
            .json(&body);

        let data: CreatedData = Self::send(request).await?;
        debug!("Created PRD {}", data.id);
        Ok(data.id)
    }

    /// All records owned by the session's identity, oldest first
    pub async fn list_records(&self, session: &Session) -> ClientResult<Vec<PrdRecord>> {
        let request = self
            .client
            .get(self.url(&format!("/api/prds/owner/{}", session.owner_id())))
            .bearer_auth(session.bearer()?);

        Self::send(request).await
    }

    /// Ask the server to assemble a draft without saving it
    pub async fn generate(&self, fields: &PrdFields) -> ClientResult<PrdDraft> {
        let request = self.client.post(self.url("/api/prds/generate")).json(fields);
        Self::send(request).await
    }

    pub async fn templates(&self) -> ClientResult<Vec<TemplateEntry>> {
        Self::send(self.client.get(self.url("/api/templates"))).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
            return envelope.data.ok_or_else(|| {
                ClientError::UnexpectedResponse("response envelope has no data".to_string())
            });
        }

        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Err(ClientError::Api {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
            }),
            Err(_) => Err(ClientError::Api {
                status: status.as_u16(),
                code: "UNKNOWN".to_string(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = PrdClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/health"), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_create_body_carries_owner_and_fields() {
        let fields = PrdFields {
            problem_statement: "Exports are slow".to_string(),
            ..PrdFields::default()
        };
        let draft = prdkit_core::assemble(&fields);
        let body = serde_json::to_value(CreateRecordBody {
            owner_id: "user-1",
            draft: &draft,
        })
        .unwrap();

        assert_eq!(body["ownerId"], "user-1");
        assert_eq!(body["problemStatement"], "Exports are slow");
        assert!(body["createdAt"].is_string());
    }
}
