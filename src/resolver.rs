use crate::error::{Error, Result};
use crate::models::GenerationRequest;

// A non-blank topic wins over an uploaded file, for a file only its name is used
pub fn resolve_subject(request: &GenerationRequest) -> Result<String> {
    let topic = request.topic.as_deref().map(str::trim);
    if let Some(topic) = topic.filter(|t| !t.is_empty()) {
        return Ok(topic.to_string());
    }

    match request.uploaded_filename.as_deref() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(Error::MissingInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn request(topic: Option<&str>, file: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            topic: topic.map(String::from),
            uploaded_filename: file.map(String::from),
        }
    }

    #[test]
    fn topic_wins_over_file() {
        let subject = resolve_subject(&request(Some("  Thermodynamics \n"), Some("notes.pdf")));
        assert_eq!(subject.unwrap(), "Thermodynamics");
    }

    #[test]
    fn file_name_used_without_topic() {
        let subject = resolve_subject(&request(None, Some("chapter 3.pdf")));
        assert_eq!(subject.unwrap(), "chapter 3.pdf");
    }

    #[test]
    fn blank_topic_falls_back_to_file() {
        let subject = resolve_subject(&request(Some("   "), Some("lecture.pptx")));
        assert_eq!(subject.unwrap(), "lecture.pptx");
    }

    #[test]
    fn nothing_supplied_is_missing_input() {
        for req in [request(None, None), request(Some("\t"), None), request(Some(""), Some(""))] {
            let err = resolve_subject(&req).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingInput);
        }
    }
}
