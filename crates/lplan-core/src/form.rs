//! Form schema and field values
//!
//! The five request fields are an explicit enumeration rather than a list of
//! string keys: each [`FormField`] knows its wire key, its label and whether
//! it is required. [`FormValues`] holds the current text of every field.

use serde::{Deserialize, Serialize};

use crate::plan::LessonPlanRequest;

/// One input of the lesson-plan form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Topic,
    Audience,
    Duration,
    Objectives,
    Materials,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 5] = [
        FormField::Topic,
        FormField::Audience,
        FormField::Duration,
        FormField::Objectives,
        FormField::Materials,
    ];

    /// Key used for this field in the request body
    pub fn key(self) -> &'static str {
        match self {
            FormField::Topic => "tema_conteudo",
            FormField::Audience => "publico",
            FormField::Duration => "tempo_aula",
            FormField::Objectives => "objetivos",
            FormField::Materials => "recursos_didaticos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Topic => "Topic",
            FormField::Audience => "Audience",
            FormField::Duration => "Duration",
            FormField::Objectives => "Objectives",
            FormField::Materials => "Materials",
        }
    }

    /// Placeholder hint shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Topic => "theme and content of the lesson",
            FormField::Audience => "e.g. 6th grade, 1st year of high school",
            FormField::Duration => "e.g. 50 minutes, 2 lessons",
            FormField::Objectives => "specific objectives (optional)",
            FormField::Materials => "available teaching resources (optional)",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Topic | FormField::Audience | FormField::Duration
        )
    }

    /// Position in [`FormField::ALL`]
    pub fn index(self) -> usize {
        match self {
            FormField::Topic => 0,
            FormField::Audience => 1,
            FormField::Duration => 2,
            FormField::Objectives => 3,
            FormField::Materials => 4,
        }
    }

    /// Look a field up by its wire key
    pub fn from_key(key: &str) -> Option<FormField> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn spec(self) -> FormSpec {
        FormSpec {
            key: self.key(),
            label: self.label(),
            required: self.is_required(),
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `{key, label, required}` record describing one form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Schema of the whole form, in display order
pub fn form_schema() -> Vec<FormSpec> {
    FormField::ALL.iter().map(|f| f.spec()).collect()
}

/// Current text of every form field. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 5],
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of one field; the others are untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style [`FormValues::set`]
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are still empty, in display order.
    ///
    /// Whitespace-only text counts as empty.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Snapshot the current values as a request
    pub fn to_request(&self) -> LessonPlanRequest {
        LessonPlanRequest {
            topic: self.get(FormField::Topic).to_string(),
            audience: self.get(FormField::Audience).to_string(),
            duration: self.get(FormField::Duration).to_string(),
            objectives: self.get(FormField::Objectives).to_string(),
            materials: self.get(FormField::Materials).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order_and_required_flags() {
        let schema = form_schema();
        let keys: Vec<_> = schema.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                "tema_conteudo",
                "publico",
                "tempo_aula",
                "objetivos",
                "recursos_didaticos"
            ]
        );
        let required: Vec<_> = schema.iter().map(|s| s.required).collect();
        assert_eq!(required, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_index_matches_all_position() {
        for (i, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_from_key_round_trips() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("habilidades"), None);
    }

    #[test]
    fn test_values_start_empty() {
        let values = FormValues::new();
        for field in FormField::ALL {
            assert_eq!(values.get(field), "");
        }
    }

    #[test]
    fn test_set_changes_exactly_one_field() {
        let mut values = FormValues::new()
            .with(FormField::Topic, "Fractions")
            .with(FormField::Audience, "5th grade");

        values.set(FormField::Duration, "50 min");

        assert_eq!(values.get(FormField::Topic), "Fractions");
        assert_eq!(values.get(FormField::Audience), "5th grade");
        assert_eq!(values.get(FormField::Duration), "50 min");
        assert_eq!(values.get(FormField::Objectives), "");
        assert_eq!(values.get(FormField::Materials), "");
    }

    #[test]
    fn test_missing_required_in_display_order() {
        let values = FormValues::new().with(FormField::Audience, "7th grade");
        assert_eq!(
            values.missing_required(),
            vec![FormField::Topic, FormField::Duration]
        );
        assert!(!values.is_complete());
    }

    #[test]
    fn test_optional_fields_never_missing() {
        let values = FormValues::new()
            .with(FormField::Topic, "Photosynthesis")
            .with(FormField::Audience, "6th grade")
            .with(FormField::Duration, "2 lessons");
        assert!(values.missing_required().is_empty());
        assert!(values.is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let values = FormValues::new()
            .with(FormField::Topic, "   ")
            .with(FormField::Audience, "6th grade")
            .with(FormField::Duration, "1h");
        assert_eq!(values.missing_required(), vec![FormField::Topic]);
    }

    #[test]
    fn test_to_request_copies_all_fields() {
        let values = FormValues::new()
            .with(FormField::Topic, "Volcanoes")
            .with(FormField::Audience, "8th grade")
            .with(FormField::Duration, "45 min")
            .with(FormField::Materials, "projector");
        let request = values.to_request();
        assert_eq!(request.topic, "Volcanoes");
        assert_eq!(request.audience, "8th grade");
        assert_eq!(request.duration, "45 min");
        assert_eq!(request.objectives, "");
        assert_eq!(request.materials, "projector");
    }
}
