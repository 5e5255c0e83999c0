// Fixed instruction template, the subject is embedded verbatim
pub fn build_prompt(subject: &str) -> String {
    format!(
        r#"
You are a study assistant.

For the following topic/content:
{subject}

Return the response strictly in JSON format like this:

{{
  "shortNotes": "....",
  "keyFormulas": "....",
  "examPoints": "...."
}}

Rules:
- shortNotes: concise bullet points
- keyFormulas: only formulas (or say 'No major formulas')
- examPoints: important exam-focused points
- Do NOT add anything outside JSON.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_subject_verbatim() {
        let prompt = build_prompt("Newton's {laws} of motion");
        assert!(prompt.contains("For the following topic/content:\nNewton's {laws} of motion\n"));
    }

    #[test]
    fn names_all_three_fields() {
        let prompt = build_prompt("x");
        for field in ["\"shortNotes\"", "\"keyFormulas\"", "\"examPoints\""] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("'No major formulas'"));
        assert!(prompt.contains("Do NOT add anything outside JSON."));
    }
}
