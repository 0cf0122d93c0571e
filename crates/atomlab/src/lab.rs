//! The atomic-structure lab: atom viewer, model timeline and knowledge check
//! composed side by side.

use crate::activities::{QuizEngine, SelectionViewer, SequenceNavigator, ShellGeometry};
use crate::api::activity::{Activity, LabConfig, LabContext};
use crate::bridge::protocol::PROTOCOL_VERSION;
use crate::bridge::snapshot::LabSnapshot;
use crate::catalog::Library;
use crate::error::LabError;
use crate::input::queue::CommandQueue;

/// Owns one instance of each activity. They never see each other.
pub struct AtomLab {
    viewer: SelectionViewer,
    navigator: SequenceNavigator,
    quiz: QuizEngine,
}

impl AtomLab {
    /// Build the lab over the embedded catalogs.
    pub fn new(config: &LabConfig) -> Result<Self, LabError> {
        Self::with_library(Library::load()?, config)
    }

    pub fn with_library(library: Library, config: &LabConfig) -> Result<Self, LabError> {
        config.validate()?;
        let Library { atoms, models, questions } = library;
        Ok(Self {
            viewer: SelectionViewer::new(atoms, ShellGeometry::from_config(config))?,
            navigator: SequenceNavigator::new(models)?,
            quiz: QuizEngine::new(questions, config.reveal_delay_ms)?,
        })
    }

    pub fn viewer(&self) -> &SelectionViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut SelectionViewer {
        &mut self.viewer
    }

    pub fn navigator(&self) -> &SequenceNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SequenceNavigator {
        &mut self.navigator
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizEngine {
        &mut self.quiz
    }

    pub fn snapshot(&self, now_ms: u64) -> LabSnapshot {
        LabSnapshot {
            protocol_version: PROTOCOL_VERSION,
            now_ms,
            viewer: self.viewer.snapshot(),
            navigator: self.navigator.snapshot(),
            quiz: self.quiz.snapshot(),
        }
    }
}

impl Activity for AtomLab {
    fn init(&mut self, ctx: &mut LabContext) {
        self.viewer.init(ctx);
        self.navigator.init(ctx);
        self.quiz.init(ctx);
    }

    fn update(&mut self, ctx: &mut LabContext, commands: &CommandQueue) {
        self.viewer.update(ctx, commands);
        self.navigator.update(ctx, commands);
        self.quiz.update(ctx, commands);
    }

    fn on_teardown(&mut self) {
        self.viewer.on_teardown();
        self.navigator.on_teardown();
        self.quiz.on_teardown();
    }
}
