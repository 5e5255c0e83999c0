use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NO_DATA: &str = "No data";

// Inbound request, either from a JSON body or a multipart form
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: Option<String>,
    // only ever set from a multipart file part
    #[serde(skip)]
    pub uploaded_filename: Option<String>,
}

// Response body on success, all three fields are always present
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudyNotes {
    pub short_notes: String,
    pub key_formulas: String,
    pub exam_points: String,
}

// What the model is asked to return. Every field is optional and untyped
// so a partial or loosely typed reply still decodes.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawStudyNotes {
    #[serde(default)]
    pub short_notes: Option<Value>,
    #[serde(default)]
    pub key_formulas: Option<Value>,
    #[serde(default)]
    pub exam_points: Option<Value>,
}

impl From<RawStudyNotes> for StudyNotes {
    fn from(raw: RawStudyNotes) -> Self {
        Self {
            short_notes: field_or_no_data(raw.short_notes),
            key_formulas: field_or_no_data(raw.key_formulas),
            exam_points: field_or_no_data(raw.exam_points),
        }
    }
}

fn field_or_no_data(value: Option<Value>) -> String {
    value
        .and_then(coerce_to_text)
        .unwrap_or_else(|| NO_DATA.to_string())
}

// None for absent or falsy values ("", 0, false, null, empty array)
fn coerce_to_text(value: Value) -> Option<String> {
    let text = match value {
        Value::Null | Value::Bool(false) => return None,
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Array(items) => items
            .into_iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join("\n"),
        other => element_text(other),
    };
    (!text.is_empty()).then_some(text)
}

// Array elements are kept as they are, falsy or not
fn element_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

// OpenAI compatible chat completion request
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

// OpenAI compatible chat completion response, only the parts we read
#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
