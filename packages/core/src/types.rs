// ABOUTME: PRD (Product Requirements Document) type definitions
// ABOUTME: Input fields, assembled drafts, persisted records, and user identities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` the same as an absent free-text field.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// User-entered fields a PRD is assembled from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdFields {
    /// Explicit title; derived from the problem statement when absent or blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub problem_statement: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub target_audience: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub goals: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub features: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub constraints: String,
}

/// A fully assembled PRD that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdDraft {
    pub title: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub constraints: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub user_stories: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PrdDraft {
    /// The free-text fields this draft was assembled from, title included
    pub fn fields(&self) -> PrdFields {
        PrdFields {
            title: Some(self.title.clone()),
            problem_statement: self.problem_statement.clone(),
            target_audience: self.target_audience.clone(),
            goals: self.goals.clone(),
            features: self.features.clone(),
            constraints: self.constraints.clone(),
        }
    }

    /// Derived sections in document order, paired with their headings
    pub fn sections(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Objectives", &self.objectives),
            ("User Stories", &self.user_stories),
            ("Requirements", &self.requirements),
            ("Acceptance Criteria", &self.acceptance_criteria),
            ("Success Metrics", &self.metrics),
            ("Risks", &self.risks),
        ]
    }

    /// Render the draft as a markdown document
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        out.push_str(&format!(
            "_Created {}_\n\n",
            self.created_at.format("%Y-%m-%d %H:%M UTC")
        ));

        for (heading, text) in [
            ("Problem Statement", &self.problem_statement),
            ("Target Audience", &self.target_audience),
            ("Goals", &self.goals),
            ("Features", &self.features),
            ("Constraints", &self.constraints),
        ] {
            if text.trim().is_empty() {
                continue;
            }
            out.push_str(&format!("## {}\n\n{}\n\n", heading, text.trim()));
        }

        for (heading, lines) in self.sections() {
            out.push_str(&format!("## {}\n\n", heading));
            for line in lines {
                // Requirements carry their own headers and "- " bullets
                if line.is_empty() || line.starts_with("- ") || line.ends_with(':') {
                    out.push_str(line);
                } else {
                    out.push_str("- ");
                    out.push_str(line);
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }
}

/// A PRD handed to the store for creation
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrd {
    /// Owning user; creation is rejected when absent
    pub owner_id: Option<String>,
    pub draft: PrdDraft,
}

impl NewPrd {
    pub fn new(owner_id: impl Into<String>, draft: PrdDraft) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
            draft,
        }
    }
}

/// A persisted PRD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdRecord {
    pub id: String,
    pub owner_id: String,
    #[serde(flatten)]
    pub draft: PrdDraft,
}

/// Identity of an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_draft() -> PrdDraft {
        PrdDraft {
            title: "PRD: Faster exports...".to_string(),
            problem_statement: "Exports are slow".to_string(),
            target_audience: "analysts".to_string(),
            goals: String::new(),
            features: "CSV export".to_string(),
            constraints: String::new(),
            objectives: vec!["Ship it".to_string()],
            user_stories: vec![],
            requirements: vec![
                "Functional Requirements:".to_string(),
                "- Implement CSV export".to_string(),
                String::new(),
            ],
            acceptance_criteria: vec![],
            metrics: vec![],
            risks: vec![],
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_fields_deserialize_null_and_missing_as_empty() {
        let fields: PrdFields = serde_json::from_str(
            r#"{"problemStatement": "Slow exports", "constraints": null}"#,
        )
        .unwrap();

        assert_eq!(fields.problem_statement, "Slow exports");
        assert_eq!(fields.constraints, "");
        assert_eq!(fields.goals, "");
        assert!(fields.title.is_none());
    }

    #[test]
    fn test_record_serializes_flat_camel_case() {
        let record = PrdRecord {
            id: "abc".to_string(),
            owner_id: "user-1".to_string(),
            draft: sample_draft(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["ownerId"], "user-1");
        assert_eq!(value["problemStatement"], "Exports are slow");
        assert!(value["userStories"].is_array());
        assert!(value["acceptanceCriteria"].is_array());
        assert!(value["createdAt"].is_string());
        assert!(value.get("draft").is_none());

        let back: PrdRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_markdown_keeps_requirement_lines_verbatim() {
        let markdown = sample_draft().to_markdown();

        assert!(markdown.starts_with("# PRD: Faster exports...\n"));
        assert!(markdown.contains("_Created 2025-01-02 03:04 UTC_"));
        assert!(markdown.contains("## Objectives\n\n- Ship it\n"));
        assert!(markdown.contains("Functional Requirements:\n- Implement CSV export\n"));
        assert!(!markdown.contains("## Goals"));
    }
}
