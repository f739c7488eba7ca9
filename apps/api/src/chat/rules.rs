//! Keyword rules — the fixed substring-matching rules that edit a resume document.
//!
//! Two rules, checked independently against the lower-cased instruction:
//! 1. "add fastapi" + "skills" → append "FastAPI" to the `skills` field.
//! 2. "add" + "skills" → append each of a fixed keyword→skill table
//!    (python, react, node, django) mentioned in the instruction.
//!
//! Dedup is raw substring containment on the running `skills` string — a
//! skill counts as present even inside an unrelated word. Preserved as-is;
//! no word-boundary or delimiter awareness.

use serde_json::{Map, Value};
use thiserror::Error;

/// Suggestions returned with every successful chat response.
pub const SUGGESTIONS: [&str; 4] = [
    "Add more technical skills",
    "Improve the about section",
    "Add project descriptions",
    "Include certifications",
];

/// Fixed keyword → skill-name table, checked in order.
const KEYWORD_SKILLS: [(&str, &str); 4] = [
    ("python", "Python"),
    ("react", "React"),
    ("node", "Node.js"),
    ("django", "Django"),
];

#[derive(Debug, Error)]
pub enum EditError {
    #[error("resume field 'skills' holds {found} instead of a string")]
    SkillsNotText { found: &'static str },
}

/// Applies the keyword rules to `resume` and returns the edited copy.
///
/// Only the `skills` field is ever written; every other key passes through
/// by value, unchanged. When no rule matches, the result is an identical
/// distinct copy of the input.
pub fn apply_instruction(
    resume: &Map<String, Value>,
    instruction: &str,
) -> Result<Map<String, Value>, EditError> {
    let mut updated = resume.clone();
    let prompt = instruction.to_lowercase();
    let mentions_skills = prompt.contains("skills");

    if mentions_skills && prompt.contains("add fastapi") {
        append_skill(&mut updated, "FastAPI")?;
    }

    // Evaluated independently of the rule above ("add fastapi" also satisfies
    // "add"), so its dedup check sees any FastAPI append already made.
    if mentions_skills && prompt.contains("add") {
        for (keyword, skill) in KEYWORD_SKILLS {
            if prompt.contains(keyword) {
                append_skill(&mut updated, skill)?;
            }
        }
    }

    Ok(updated)
}

/// Appends `skill` to the document's `skills` string unless already present
/// as a substring. Comma-space separated when non-empty, set directly when
/// empty or absent.
fn append_skill(resume: &mut Map<String, Value>, skill: &str) -> Result<(), EditError> {
    let current = match resume.get("skills") {
        None => "",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(EditError::SkillsNotText {
                found: json_type_name(other),
            })
        }
    };

    if current.contains(skill) {
        return Ok(());
    }

    let next = if current.is_empty() {
        skill.to_string()
    } else {
        format!("{current}, {skill}")
    };
    resume.insert("skills".to_string(), Value::String(next));

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
