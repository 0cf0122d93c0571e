//! Outbound read-only snapshot of the whole lab, delivered to the shell as JSON.

use serde::Serialize;

use crate::activities::{NavigatorSnapshot, QuizSnapshot, ViewerSnapshot};

/// Everything the shell needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct LabSnapshot {
    pub protocol_version: u32,
    /// Virtual time the snapshot was taken at.
    pub now_ms: u64,
    pub viewer: ViewerSnapshot,
    pub navigator: NavigatorSnapshot,
    pub quiz: QuizSnapshot,
}

impl LabSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
