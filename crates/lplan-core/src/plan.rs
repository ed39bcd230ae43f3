//! Lesson plan request and response documents
//!
//! The generation endpoint speaks Portuguese on the wire (`tema_conteudo`,
//! `habilidades_bncc`, ...). The Rust types use English names and map to the
//! wire keys with serde renames.
//!
//! The response is advisory: every field is optional and a field with the
//! wrong JSON type decodes as absent instead of failing the whole document.
//! [`LessonPlan::normalize`] turns the partial [`LessonPlanResponse`] into a
//! fully-populated [`LessonPlan`] for rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────

/// Body of a generation request. Optional fields are sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanRequest {
    #[serde(rename = "tema_conteudo")]
    pub topic: String,
    #[serde(rename = "publico")]
    pub audience: String,
    #[serde(rename = "tempo_aula")]
    pub duration: String,
    #[serde(rename = "objetivos", default)]
    pub objectives: String,
    #[serde(rename = "recursos_didaticos", default)]
    pub materials: String,
}

// ─────────────────────────────────────────────────────────────────
// Response (partial, as received)
// ─────────────────────────────────────────────────────────────────

/// Generation result as received from the endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanResponse {
    #[serde(
        rename = "habilidades_bncc",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub skills: Option<Vec<String>>,

    #[serde(
        rename = "objetivos_aula",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub lesson_objectives: Option<Vec<String>>,

    #[serde(
        rename = "metodologia",
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub methodology: Option<MethodologyDoc>,

    #[serde(
        rename = "materiais_necessarios",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_materials: Option<Vec<String>>,

    #[serde(
        rename = "estrutura_aula",
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub lesson_structure: Option<LessonStructureDoc>,

    #[serde(
        rename = "avaliacao",
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub assessment: Option<AssessmentDoc>,

    #[serde(
        rename = "para_saber_mais",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub further_reading: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologyDoc {
    #[serde(
        rename = "justificativa",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub justification: Option<String>,

    #[serde(
        rename = "metodologias_sugeridas",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_methods: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStructureDoc {
    #[serde(
        rename = "tempo_total",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_time: Option<String>,

    #[serde(
        rename = "etapas",
        default,
        deserialize_with = "lenient::objects",
        skip_serializing_if = "Option::is_none"
    )]
    pub steps: Option<Vec<StepDoc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDoc {
    #[serde(
        rename = "nome",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "tempo",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,

    #[serde(
        rename = "atividades",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub activities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDoc {
    #[serde(
        rename = "tipos",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub types: Option<Vec<String>>,

    #[serde(
        rename = "criterios",
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub criteria: Option<Vec<String>>,
}

impl LessonPlanResponse {
    /// Decode a response document from a JSON value.
    ///
    /// Only the top level is strict: it must be a JSON object. Everything
    /// below degrades field by field.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Json(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            ))));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a response document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// True when no section carries any data
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Tolerant field decoders: a value of the wrong shape becomes `None`.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_text(value))
    }

    pub fn strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Some(items.into_iter().filter_map(scalar_text).collect())),
            _ => Ok(None),
        }
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
            _ => Ok(None),
        }
    }

    pub fn objects<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .filter(Value::is_object)
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            )),
            _ => Ok(None),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Normalized plan
// ─────────────────────────────────────────────────────────────────

/// Fully-populated lesson plan. Missing sections are empty, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonPlan {
    pub skills: Vec<String>,
    pub lesson_objectives: Vec<String>,
    pub methodology: Methodology,
    pub required_materials: Vec<String>,
    pub lesson_structure: LessonStructure,
    pub assessment: Assessment,
    pub further_reading: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Methodology {
    pub justification: String,
    pub suggested_methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonStructure {
    pub total_time: String,
    pub steps: Vec<LessonStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonStep {
    pub name: String,
    pub time: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assessment {
    pub types: Vec<String>,
    pub criteria: Vec<String>,
}

impl LessonPlan {
    /// Fill every missing part of `doc` with an empty default
    pub fn normalize(doc: &LessonPlanResponse) -> Self {
        let methodology = doc
            .methodology
            .as_ref()
            .map(|m| Methodology {
                justification: m.justification.clone().unwrap_or_default(),
                suggested_methods: m.suggested_methods.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        let lesson_structure = doc
            .lesson_structure
            .as_ref()
            .map(|s| LessonStructure {
                total_time: s.total_time.clone().unwrap_or_default(),
                steps: s
                    .steps
                    .iter()
                    .flatten()
                    .map(|step| LessonStep {
                        name: step.name.clone().unwrap_or_default(),
                        time: step.time.clone().unwrap_or_default(),
                        activities: step.activities.clone().unwrap_or_default(),
                    })
                    .collect(),
            })
            .unwrap_or_default();

        let assessment = doc
            .assessment
            .as_ref()
            .map(|a| Assessment {
                types: a.types.clone().unwrap_or_default(),
                criteria: a.criteria.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            skills: doc.skills.clone().unwrap_or_default(),
            lesson_objectives: doc.lesson_objectives.clone().unwrap_or_default(),
            methodology,
            required_materials: doc.required_materials.clone().unwrap_or_default(),
            lesson_structure,
            assessment,
            further_reading: doc.further_reading.clone().unwrap_or_default(),
        }
    }
}

impl From<&LessonPlanResponse> for LessonPlan {
    fn from(doc: &LessonPlanResponse) -> Self {
        Self::normalize(doc)
    }
}
