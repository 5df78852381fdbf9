use super::types::AnalysisResult;

const FENCE_JSON: &str = "```json";
const FENCE: &str = "```";

/// Strips a leading/trailing markdown fence marker, if present. Markers that
/// are absent leave the text untouched.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE_JSON) {
        text = rest;
    } else if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Fallback for output where the fence markers are malformed or fused with
/// surrounding prose: slice from the first `{` to the last `}` and try that.
fn brace_slice(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Turns raw model output into an `AnalysisResult`. A parse failure is a
/// normal outcome class, reported through `error_message`; this function
/// never returns an error.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    let stripped = strip_fences(raw);

    if let Ok(result) = serde_json::from_str(stripped) {
        return result;
    }

    if let Some(parsed) = brace_slice(raw).and_then(|s| serde_json::from_str(s).ok()) {
        return parsed;
    }

    AnalysisResult::failure(format!("Model response was not valid JSON: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RiskRecord;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            risks: vec![RiskRecord {
                risk_category: "equipment risk".to_string(),
                risk_summary: "The kitchen oven is old and may fail at any time.".to_string(),
                trigger_phrase: "the oven is old, might break".to_string(),
            }],
            error_message: None,
        }
    }

    #[test]
    fn test_fenced_output_round_trips() {
        let result = sample_result();
        let fenced = format!("```json\n{}\n```", serde_json::to_string(&result).unwrap());
        assert_eq!(parse_analysis(&fenced), result);
    }

    #[test]
    fn test_fenced_empty_risks_parses_clean() {
        let parsed = parse_analysis("```json\n{\"risks\":[]}\n```");
        assert!(parsed.risks.is_empty());
        assert!(parsed.error_message.is_none());
    }

    #[rstest]
    #[case::bare_json("{\"risks\":[]}")]
    #[case::surrounding_whitespace("  \n {\"risks\":[]} \n\t")]
    #[case::fence_without_language("```\n{\"risks\":[]}\n```")]
    #[case::opening_fence_only("```json\n{\"risks\":[]}")]
    fn test_fence_variants_parse(#[case] raw: &str) {
        let parsed = parse_analysis(raw);
        assert!(parsed.error_message.is_none(), "failed on: {raw:?}");
        assert!(parsed.risks.is_empty());
    }

    #[test]
    fn test_json_fused_with_prose_falls_back_to_brace_scan() {
        let raw = "Sure, here is the analysis: {\"risks\":[]} Hope this helps!";
        let parsed = parse_analysis(raw);
        assert!(parsed.error_message.is_none());
        assert!(parsed.risks.is_empty());
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   \n ")]
    #[case::truncated_json("{\"risks\": [")]
    #[case::plain_prose("I could not find any risks in this conversation.")]
    #[case::fences_only("```json\n```")]
    fn test_malformed_output_recovers_with_error_message(#[case] raw: &str) {
        let parsed = parse_analysis(raw);
        assert!(parsed.risks.is_empty());
        let message = parsed.error_message.expect("expected an error message");
        assert!(!message.is_empty());
    }

    #[test]
    fn test_error_message_includes_offending_text() {
        let parsed = parse_analysis("not json at all");
        assert!(parsed.error_message.unwrap().contains("not json at all"));
    }

    #[test]
    fn test_missing_risks_key_accepted_as_is() {
        let parsed = parse_analysis("{\"unrelated\": true}");
        assert!(parsed.risks.is_empty());
        assert!(parsed.error_message.is_none());
    }

    #[test]
    fn test_partial_record_fields_propagate() {
        let parsed = parse_analysis(
            "```json\n{\"risks\":[{\"risk_category\":\"personnel risk\"}]}\n```",
        );
        assert_eq!(parsed.risks.len(), 1);
        assert_eq!(parsed.risks[0].risk_category, "personnel risk");
        assert_eq!(parsed.risks[0].risk_summary, "");
    }
}
