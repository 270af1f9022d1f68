use anyhow::anyhow;
use clap::Args;

use prdkit_client::{DraftForm, FormEvent, FormField};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Template id to seed the fields from (see `prdkit templates`)
    #[arg(short, long)]
    pub template: Option<String>,
    /// Document title (derived from the problem statement when omitted)
    #[arg(long)]
    pub title: Option<String>,
    /// Problem statement
    #[arg(short, long)]
    pub problem: Option<String>,
    /// Target audience
    #[arg(short, long)]
    pub audience: Option<String>,
    /// Goals
    #[arg(short, long)]
    pub goals: Option<String>,
    /// Key features
    #[arg(short, long)]
    pub features: Option<String>,
    /// Constraints
    #[arg(short, long)]
    pub constraints: Option<String>,
}

/// Seed the form from the chosen template, then layer flag values on top
pub fn build_form(args: GenerateArgs) -> anyhow::Result<DraftForm> {
    let mut form = DraftForm::new();

    if let Some(template_id) = args.template.as_deref() {
        let event = FormEvent::select_template(template_id)
            .ok_or_else(|| anyhow!("Unknown template '{}'", template_id))?;
        form.apply(event);
    }

    let edits = [
        (FormField::Title, args.title),
        (FormField::ProblemStatement, args.problem),
        (FormField::TargetAudience, args.audience),
        (FormField::Goals, args.goals),
        (FormField::Features, args.features),
        (FormField::Constraints, args.constraints),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            form.apply(FormEvent::edit(field, value));
        }
    }

    Ok(form)
}

pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let form = build_form(args)?;
    print!("{}", form.assemble().to_markdown());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_template_seed() {
        let form = build_form(GenerateArgs {
            template: Some("mvp".to_string()),
            goals: Some("Validate demand".to_string()),
            ..GenerateArgs::default()
        })
        .unwrap();

        assert_eq!(form.template_id(), Some("mvp"));
        assert_eq!(form.fields().goals, "Validate demand");
        assert!(!form.fields().problem_statement.is_empty());
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let result = build_form(GenerateArgs {
            template: Some("nope".to_string()),
            ..GenerateArgs::default()
        });
        assert!(result.is_err());
    }
}
