/// Builds the instruction payload for one transcript. Pure string
/// construction: the same transcript always yields the same prompt.
///
/// The downstream parser is strict, so the prompt over-specifies the output
/// contract (schema example, fenced JSON only, no surrounding prose). This is
/// the primary defense against malformed model output.
pub fn build_prompt(conversation_log: &str) -> String {
    format!(
        r#"You are an expert at extracting business risks from conversation transcripts and reporting them in a fixed JSON format.
From the conversation log below, extract every risk that could threaten the continuity of the business, and output it in the JSON format specified here.

# Output format (follow this JSON shape exactly)
```json
{{
  "risks": [
    {{
      "risk_category": "(risk classification, e.g. equipment risk, personnel risk, disaster risk, liability risk)",
      "risk_summary": "(concise summary of the specific risk identified)",
      "trigger_phrase": "(the exact utterance from the conversation that evidences the risk)"
    }}
  ]
}}
```

# Instructions
- Do not include any opening greeting, preamble, or trailing commentary or conclusion.
- Output only the fenced `json` code block in the format above.
- Never output text in any other format.
- If the conversation log contains no risks, output an empty `risks` array: [].

# Input: conversation log
{conversation_log}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_is_deterministic() {
        let transcript = "Owner: the oven is old, might break.";
        assert_eq!(build_prompt(transcript), build_prompt(transcript));
    }

    #[test]
    fn test_prompt_embeds_transcript_verbatim_at_end() {
        let transcript = "Owner: if I get sick, the shop closes.";
        let prompt = build_prompt(transcript);
        assert!(prompt.ends_with(transcript));
    }

    #[test]
    fn test_prompt_specifies_schema_and_constraints() {
        let prompt = build_prompt("hello");
        assert!(prompt.contains("risk_category"));
        assert!(prompt.contains("risk_summary"));
        assert!(prompt.contains("trigger_phrase"));
        assert!(prompt.contains("```json"));
        assert!(prompt.contains("empty `risks` array"));
    }

    #[test]
    fn test_empty_transcript_is_valid_input() {
        let prompt = build_prompt("");
        assert!(prompt.contains("# Input: conversation log"));
    }
}
