// ABOUTME: Editable PRD draft form driven by explicit events
// ABOUTME: Template selection seeds the fields; assembly goes through the document assembler

use std::fmt;
use std::str::FromStr;

use prdkit_core::{assemble, find_template, PrdDraft, PrdFields, TemplateEntry};

/// Free-text inputs the user can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    ProblemStatement,
    TargetAudience,
    Goals,
    Features,
    Constraints,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::ProblemStatement,
        FormField::TargetAudience,
        FormField::Goals,
        FormField::Features,
        FormField::Constraints,
    ];

    /// Wire name (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::ProblemStatement => "problemStatement",
            FormField::TargetAudience => "targetAudience",
            FormField::Goals => "goals",
            FormField::Features => "features",
            FormField::Constraints => "constraints",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Events that change the draft form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Replace the inputs with a template's seed values
    TemplateSelected(TemplateEntry),
    FieldEdited { field: FormField, value: String },
    Reset,
}

impl FormEvent {
    /// Selection event for a catalog template, if the id exists
    pub fn select_template(template_id: &str) -> Option<FormEvent> {
        find_template(template_id).map(|entry| FormEvent::TemplateSelected(entry.clone()))
    }

    pub fn edit(field: FormField, value: impl Into<String>) -> FormEvent {
        FormEvent::FieldEdited {
            field,
            value: value.into(),
        }
    }
}

/// Form state for a PRD being written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    fields: PrdFields,
    template_id: Option<String>,
    notes: Vec<(String, String)>,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::TemplateSelected(entry) => {
                self.fields = entry.seed_fields();
                self.notes = entry
                    .context_notes()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect();
                self.template_id = Some(entry.id);
            }
            FormEvent::FieldEdited { field, value } => {
                let fields = &mut self.fields;
                match field {
                    FormField::Title => fields.title = Some(value),
                    FormField::ProblemStatement => fields.problem_statement = value,
                    FormField::TargetAudience => fields.target_audience = value,
                    FormField::Goals => fields.goals = value,
                    FormField::Features => fields.features = value,
                    FormField::Constraints => fields.constraints = value,
                }
            }
            FormEvent::Reset => *self = Self::default(),
        }
    }

    pub fn fields(&self) -> &PrdFields {
        &self.fields
    }

    /// Id of the template the form was last seeded from
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Guidance from the selected template that does not map to an input
    pub fn notes(&self) -> &[(String, String)] {
        &self.notes
    }

    pub fn assemble(&self) -> PrdDraft {
        assemble(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_selection_seeds_fields() {
        let mut form = DraftForm::new();
        form.apply(FormEvent::select_template("bug-fix").unwrap());

        let entry = find_template("bug-fix").unwrap();
        assert_eq!(form.template_id(), Some("bug-fix"));
        assert_eq!(form.fields(), &entry.seed_fields());
        assert!(form.notes().iter().any(|(key, _)| key == "painPoints"));
        assert!(form.fields().title.is_none());
    }

    #[test]
    fn test_unknown_template_has_no_event() {
        assert!(FormEvent::select_template("does-not-exist").is_none());
    }

    #[test]
    fn test_edits_after_template_selection() {
        let mut form = DraftForm::new();
        form.apply(FormEvent::select_template("mvp").unwrap());
        form.apply(FormEvent::edit(FormField::Constraints, "two engineers"));
        form.apply(FormEvent::edit(FormField::Title, "Lean launch"));

        let draft = form.assemble();
        assert_eq!(draft.title, "Lean launch");
        assert_eq!(draft.risks[0], "Technical Risk: two engineers");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = DraftForm::new();
        form.apply(FormEvent::select_template("integration").unwrap());
        form.apply(FormEvent::Reset);

        assert_eq!(form, DraftForm::new());
        assert_eq!(form.assemble().title, "Product Requirement Document");
    }

    #[test]
    fn test_form_field_parsing() {
        assert_eq!("problemStatement".parse::<FormField>(), Ok(FormField::ProblemStatement));
        assert_eq!(" GOALS ".parse::<FormField>(), Ok(FormField::Goals));
        assert!("objectives".parse::<FormField>().is_err());
    }
}
