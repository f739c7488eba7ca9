use std::sync::Arc;

use crate::chat::editor::ResumeEditor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume editor. Default: KeywordResumeEditor, fixed at startup.
    pub editor: Arc<dyn ResumeEditor>,
}
