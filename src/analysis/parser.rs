use super::result::CategoryScore;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The structured reply expected from the collaborator. Every field is
/// defaulted so a sparse reply still parses; range and presence checks
/// happen later in validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelReply {
    pub category_scores: BTreeMap<String, CategoryScore>,
    pub overall_assessment: String,
    pub top_strengths: Vec<String>,
    pub top_concerns: Vec<String>,
    pub investment_recommendation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Strip an optional surrounding Markdown code fence: when the reply starts
/// with ``` the first and last lines are dropped. Anything else is returned
/// untouched.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let without_opening = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return trimmed,
    };
    without_opening
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_opening)
        .trim()
}

/// Parse the collaborator's raw reply. Failure is terminal and keeps the
/// full raw reply for diagnostics.
pub fn parse_reply(raw: &str) -> Result<ModelReply, ParseError> {
    let body = strip_code_fences(raw);
    serde_json::from_str(body).map_err(|source| ParseError {
        raw_reply: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_parses() {
        let reply = parse_reply(r#"{ "investment_recommendation": "KOPEN" }"#).expect("parses");
        assert_eq!(reply.investment_recommendation, "KOPEN");
        assert!(reply.category_scores.is_empty());
    }

    #[test]
    fn fenced_json_parses() {
        let raw = "```json\n{ \"overall_assessment\": \"prima\" }\n```";
        let reply = parse_reply(raw).expect("parses");
        assert_eq!(reply.overall_assessment, "prima");
    }

    #[test]
    fn fence_without_language_tag_parses() {
        let raw = "```\n{ \"top_strengths\": [\"ligging\"] }\n```";
        let reply = parse_reply(raw).expect("parses");
        assert_eq!(reply.top_strengths, vec!["ligging"]);
    }

    #[test]
    fn invalid_json_keeps_the_raw_reply() {
        let err = parse_reply("I am sorry, I cannot do that").expect_err("must fail");
        assert_eq!(err.raw_reply, "I am sorry, I cannot do that");
    }

    #[test]
    fn category_scores_parse_with_defaults() {
        let raw = r#"{ "category_scores": { "location": { "score": 8.5 } } }"#;
        let reply = parse_reply(raw).expect("parses");
        let location = &reply.category_scores["location"];
        assert_eq!(location.score, 8.5);
        assert!(location.reasoning.is_empty());
        assert!(location.red_flags.is_empty());
    }

    #[test]
    fn version_specific_top_level_keys_are_retained() {
        let raw = r#"{ "investment_recommendation": "KOPEN", "action_plan": ["bied 115k"] }"#;
        let reply = parse_reply(raw).expect("parses");
        assert!(reply.extra.contains_key("action_plan"));
    }
}
