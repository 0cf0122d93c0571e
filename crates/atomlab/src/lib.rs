pub mod activities;
pub mod api;
pub mod bridge;
pub mod catalog;
pub mod core;
pub mod error;
pub mod input;
pub mod lab;

// Re-export key types at crate root for convenience
pub use activities::{
    compute_layout, AtomLayout, DisplayToggles, OptionMark, QuizEngine, QuizResult, QuizState,
    ScoreBand, ScoreTier, SelectionViewer, SequenceNavigator, ShellGeometry,
};
pub use api::activity::{Activity, LabConfig, LabContext};
pub use api::types::{DisplayToggle, LabEvent};
pub use bridge::protocol::{EventLayout, PROTOCOL_VERSION};
pub use bridge::snapshot::LabSnapshot;
pub use catalog::{AtomRecord, Library, ModelRecord, ModelVisual, QuizQuestion};
pub use core::time::VirtualClock;
pub use core::timer::{OneShotTimer, TimerHandle};
pub use error::LabError;
pub use input::queue::{CommandQueue, LabCommand};
pub use lab::AtomLab;
