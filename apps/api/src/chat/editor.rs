//! Resume editor — pluggable, trait-based backend that applies a chat
//! instruction to a resume document.
//!
//! Default: `KeywordResumeEditor` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn ResumeEditor>`, fixed at startup,
//! so a semantic backend can replace it without touching handler code.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::chat::rules::apply_instruction;
use crate::errors::AppError;

/// The editor trait. Implement this to swap backends without touching the
/// endpoint, handler, or caller code.
#[async_trait]
pub trait ResumeEditor: Send + Sync {
    async fn apply(
        &self,
        resume: &Map<String, Value>,
        instruction: &str,
    ) -> Result<Map<String, Value>, AppError>;
}

/// Keyword-rule editor. Matches a fixed set of substrings in the instruction
/// and edits only the `skills` field of the document.
pub struct KeywordResumeEditor;

#[async_trait]
impl ResumeEditor for KeywordResumeEditor {
    async fn apply(
        &self,
        resume: &Map<String, Value>,
        instruction: &str,
    ) -> Result<Map<String, Value>, AppError> {
        apply_instruction(resume, instruction).map_err(|e| AppError::Internal(e.into()))
    }
}
