// ABOUTME: SQLite-backed PRD store
// ABOUTME: One INSERT per record; derived sections stored as JSON text

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use prdkit_core::{generate_record_id, NewPrd, PrdDraft, PrdRecord};

use super::{owner_of, PrdStore};
use crate::error::{StorageError, StorageResult};

pub struct SqlitePrdStore {
    pool: SqlitePool,
}

impl SqlitePrdStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_record(row: &SqliteRow) -> Result<PrdRecord, StorageError> {
        let list = |column: &str| -> Result<Vec<String>, StorageError> {
            let raw: String = row.try_get(column)?;
            Ok(serde_json::from_str(&raw)?)
        };
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(PrdRecord {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            draft: PrdDraft {
                title: row.try_get("title")?,
                problem_statement: row.try_get("problem_statement")?,
                target_audience: row.try_get("target_audience")?,
                goals: row.try_get("goals")?,
                features: row.try_get("features")?,
                constraints: row.try_get("constraints")?,
                objectives: list("objectives")?,
                user_stories: list("user_stories")?,
                requirements: list("requirements")?,
                acceptance_criteria: list("acceptance_criteria")?,
                metrics: list("metrics")?,
                risks: list("risks")?,
                created_at,
            },
        })
    }
}

#[async_trait]
impl PrdStore for SqlitePrdStore {
    async fn create(&self, record: NewPrd) -> StorageResult<String> {
        let owner_id = owner_of(&record)?;
        let id = generate_record_id();
        let draft = &record.draft;

        debug!("Creating PRD {} for owner {}", id, owner_id);

        sqlx::query(
            r#"
            INSERT INTO prds (
                id, owner_id, title, problem_statement, target_audience, goals, features,
                constraints, objectives, user_stories, requirements, acceptance_criteria,
                metrics, risks, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&owner_id)
        .bind(&draft.title)
        .bind(&draft.problem_statement)
        .bind(&draft.target_audience)
        .bind(&draft.goals)
        .bind(&draft.features)
        .bind(&draft.constraints)
        .bind(serde_json::to_string(&draft.objectives)?)
        .bind(serde_json::to_string(&draft.user_stories)?)
        .bind(serde_json::to_string(&draft.requirements)?)
        .bind(serde_json::to_string(&draft.acceptance_criteria)?)
        .bind(serde_json::to_string(&draft.metrics)?)
        .bind(serde_json::to_string(&draft.risks)?)
        .bind(draft.created_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_by_owner(&self, owner_id: &str) -> StorageResult<Vec<PrdRecord>> {
        debug!("Listing PRDs for owner {}", owner_id);

        let rows = sqlx::query("SELECT * FROM prds WHERE owner_id = ? ORDER BY seq ASC")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
