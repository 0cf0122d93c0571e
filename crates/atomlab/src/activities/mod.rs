// activities/mod.rs
//
// The three independent interactive components of the lab.
// They share no state; each consumes only the commands addressed to it.

pub mod navigator;
pub mod quiz;
pub mod viewer;

pub use navigator::{NavigatorSnapshot, SequenceNavigator, TimelineEntry};
pub use quiz::{OptionMark, QuizEngine, QuizResult, QuizSnapshot, QuizState, ScoreBand, ScoreTier};
pub use viewer::{
    compute_layout, AtomLayout, DisplayToggles, ElectronSlot, SelectionViewer, ShellGeometry,
    ShellLayout, ViewerSnapshot,
};
