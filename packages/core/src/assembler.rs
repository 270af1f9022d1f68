// ABOUTME: Document assembler turning user-entered fields into a complete PRD
// ABOUTME: Every derived section is deterministic boilerplate interpolated from the fields

use chrono::{DateTime, Utc};

use crate::types::{PrdDraft, PrdFields};

/// Title used when the problem statement has no words
pub const FALLBACK_TITLE: &str = "Product Requirement Document";

/// Risk wording used when no constraints were supplied
pub const FALLBACK_TECHNICAL_RISK: &str = "Integration challenges";

/// Number of problem-statement words carried into a derived title
const TITLE_WORDS: usize = 6;

/// Derive a title from the first words of the problem statement
pub fn derive_title(problem_statement: &str) -> String {
    let words: Vec<&str> = problem_statement
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect();

    if words.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        format!("PRD: {}...", words.join(" "))
    }
}

pub fn derive_objectives(goals: &str) -> Vec<String> {
    vec![
        format!("Deliver a solution that addresses: {}", goals),
        "Ensure user adoption meets target metrics".to_string(),
        "Maintain system performance and reliability".to_string(),
        "Provide measurable business value".to_string(),
    ]
}

pub fn derive_user_stories(target_audience: &str, features: &str) -> Vec<String> {
    vec![
        format!(
            "As a {}, I want to use {} so that I can achieve my goal.",
            target_audience, features
        ),
        format!(
            "As a {}, I want intuitive design so that I can use it easily.",
            target_audience
        ),
        "As a stakeholder, I want measurable metrics to track progress.".to_string(),
    ]
}

/// Requirements as nine lines: functional header and items, a blank
/// separator, then the non-functional header and items.
pub fn derive_requirements(features: &str) -> Vec<String> {
    vec![
        "Functional Requirements:".to_string(),
        format!("- Implement {}", features),
        "- Responsive UI design".to_string(),
        "- User authentication and authorization".to_string(),
        String::new(),
        "Non-Functional Requirements:".to_string(),
        "- 99.9% uptime".to_string(),
        "- Accessibility compliance".to_string(),
        "- Secure data handling".to_string(),
    ]
}

pub fn derive_acceptance_criteria() -> Vec<String> {
    vec![
        "✓ Feature works as described".to_string(),
        "✓ All user stories are satisfied".to_string(),
        "✓ UI responsive on all devices".to_string(),
        "✓ Performance benchmarks met".to_string(),
    ]
}

pub fn derive_metrics() -> Vec<String> {
    vec![
        "User Adoption: 80% of target users within 30 days".to_string(),
        "Performance: Task time reduced by 40%".to_string(),
        "Quality: Less than 2% error rate".to_string(),
        "Satisfaction: 4.5+ star user feedback".to_string(),
    ]
}

pub fn derive_risks(constraints: &str) -> Vec<String> {
    let technical = if constraints.is_empty() {
        FALLBACK_TECHNICAL_RISK
    } else {
        constraints
    };

    vec![
        format!("Technical Risk: {}", technical),
        "Timeline Risk: External dependencies".to_string(),
        "User Adoption Risk: Training requirements".to_string(),
        "Security Risk: Data privacy and compliance".to_string(),
    ]
}

/// Assemble a complete draft stamped with the current time
pub fn assemble(fields: &PrdFields) -> PrdDraft {
    assemble_at(fields, Utc::now())
}

/// Assemble a complete draft with an explicit creation timestamp
pub fn assemble_at(fields: &PrdFields, created_at: DateTime<Utc>) -> PrdDraft {
    let title = match fields.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => derive_title(&fields.problem_statement),
    };

    PrdDraft {
        title,
        problem_statement: fields.problem_statement.clone(),
        target_audience: fields.target_audience.clone(),
        goals: fields.goals.clone(),
        features: fields.features.clone(),
        constraints: fields.constraints.clone(),
        objectives: derive_objectives(&fields.goals),
        user_stories: derive_user_stories(&fields.target_audience, &fields.features),
        requirements: derive_requirements(&fields.features),
        acceptance_criteria: derive_acceptance_criteria(),
        metrics: derive_metrics(),
        risks: derive_risks(&fields.constraints),
        created_at,
    }
}
