use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{extraction::value_objects::Extraction, order::entities::OrderDraft};

// Greedy: first `{` through last `}`, newlines included.
static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("object span pattern is valid"));

/// Removes Markdown code-fence markers, keeping the fenced content.
pub fn strip_code_fences(raw_text: &str) -> String {
    raw_text.replace("```json", "").replace("```", "")
}

/// The candidate JSON object text in an assistant reply, if any.
pub fn locate_object(raw_text: &str) -> Option<String> {
    let cleaned = strip_code_fences(raw_text);
    OBJECT_SPAN
        .find(&cleaned)
        .map(|span| span.as_str().to_string())
}

/// Parses the JSON object in an assistant reply. `None` covers both "no
/// object yet" and "object is not valid JSON". No shape check is made here;
/// see [`inspect`] for that.
pub fn extract(raw_text: &str) -> Option<serde_json::Value> {
    let fragment = locate_object(raw_text)?;
    serde_json::from_str(&fragment).ok()
}

/// Classifies an assistant reply for display and commit.
pub fn inspect(raw_text: &str) -> Extraction {
    let Some(fragment) = locate_object(raw_text) else {
        return Extraction::Absent;
    };

    let payload: serde_json::Value = match serde_json::from_str(&fragment) {
        Ok(payload) => payload,
        Err(e) => {
            return Extraction::Malformed {
                reason: e.to_string(),
            };
        }
    };

    match OrderDraft::from_value(&payload) {
        Ok(draft) => Extraction::Candidate { payload, draft },
        Err(e) => Extraction::Invalid {
            payload,
            reason: e.to_string(),
        },
    }
}
