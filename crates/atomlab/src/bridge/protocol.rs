/// Wire protocol between the lab core and the TypeScript shell.
/// Must stay in sync with the shell's `protocol.ts`.
///
/// Inbound: `(kind: u32, a: f32)` command tuples, see [`command_kinds`].
/// Outbound:
/// ```text
/// [Events: max_events × 4 floats]   kind, a, b, c   (see event_kinds)
/// [Snapshot: JSON string]           see bridge::snapshot
/// ```

use crate::api::activity::LabConfig;

/// Protocol version reported to the shell.
pub const PROTOCOL_VERSION: u32 = 1;

/// Floats per outbound event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Command kinds (shell → Rust).
pub mod command_kinds {
    pub const SELECT_ATOM: u32 = 1;      // a = atom index
    pub const TOGGLE: u32 = 2;           // a = 0 electrons, 1 orbits, 2 animation
    pub const NEXT_MODEL: u32 = 10;
    pub const PREVIOUS_MODEL: u32 = 11;
    pub const JUMP_TO_MODEL: u32 = 12;   // a = model index
    pub const SELECT_OPTION: u32 = 20;   // a = option index
    pub const CONFIRM: u32 = 21;
    pub const RESET_QUIZ: u32 = 22;
}

/// Event kinds (Rust → shell).
pub mod event_kinds {
    /// a = atom index
    pub const ATOM_SELECTED: f32 = 1.0;
    /// a = toggle code, b = new value (0/1)
    pub const TOGGLE_CHANGED: f32 = 2.0;
    /// a = model index
    pub const MODEL_CHANGED: f32 = 10.0;
    /// a = question index, b = option index
    pub const OPTION_SELECTED: f32 = 20.0;
    /// Confirm without a selection. The shell shows "Please select an answer".
    pub const ANSWER_REQUIRED: f32 = 21.0;
    /// a = question index, b = chosen option, c = 1 if correct
    pub const ANSWER_REVEALED: f32 = 22.0;
    /// a = new question index
    pub const QUESTION_ADVANCED: f32 = 23.0;
    /// a = score, b = question count, c = tier code
    pub const QUIZ_COMPLETED: f32 = 24.0;
    pub const QUIZ_RESET: f32 = 25.0;
    /// A command broke a caller precondition and was ignored. a = command kind.
    pub const COMMAND_REJECTED: f32 = 99.0;
}

/// Buffer sizes derived from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLayout {
    /// Maximum events per frame.
    pub max_events: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,
}

impl EventLayout {
    pub fn new(max_events: usize) -> Self {
        Self {
            max_events,
            event_data_floats: max_events * EVENT_FLOATS,
        }
    }

    pub fn from_config(config: &LabConfig) -> Self {
        Self::new(config.max_events)
    }
}
