use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::{RawStudyNotes, StudyNotes};
use crate::prompt::build_prompt;
use crate::provider::{CompletionProvider, CompletionRequest};

pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, subject: &str) -> Result<StudyNotes> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(subject),
        };

        let raw = self.provider.complete(request).await?;
        parse_study_notes(&raw)
    }
}

// Missing or falsy fields are filled with "No data"
pub fn parse_study_notes(raw: &str) -> Result<StudyNotes> {
    // go through a map first, a derived struct would also accept a JSON array
    serde_json::from_str::<Map<String, Value>>(strip_code_fence(raw))
        .and_then(|object| serde_json::from_value::<RawStudyNotes>(Value::Object(object)))
        .map(StudyNotes::from)
        .map_err(|source| Error::UpstreamFormat {
            raw: raw.to_string(),
            source,
        })
}

// Models sometimes wrap the object in ```json ... ``` despite being told not to
fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(inner) = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}
