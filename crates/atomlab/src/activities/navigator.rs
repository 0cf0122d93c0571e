//! Timeline of historical atomic models.

use serde::Serialize;

use crate::api::activity::{Activity, LabContext};
use crate::api::types::LabEvent;
use crate::bridge::protocol::event_kinds;
use crate::catalog::ModelRecord;
use crate::error::LabError;
use crate::input::queue::{CommandQueue, LabCommand};

/// Current position in the model catalog.
///
/// `next`/`previous` wrap around; `is_first`/`is_last` let the shell disable
/// its boundary buttons. Both behaviours are kept as they are.
pub struct SequenceNavigator {
    models: Vec<ModelRecord>,
    current: usize,
}

impl SequenceNavigator {
    pub fn new(models: Vec<ModelRecord>) -> Result<Self, LabError> {
        if models.is_empty() {
            return Err(LabError::Catalog("model catalog is empty".into()));
        }
        Ok(Self { models, current: 0 })
    }

    /// Advance with wraparound. Returns the new index.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.models.len();
        self.current
    }

    /// Step back with wraparound. Returns the new index.
    pub fn previous(&mut self) -> usize {
        let n = self.models.len();
        self.current = (self.current + n - 1) % n;
        self.current
    }

    /// Jump straight to `index`. Out-of-range input is rejected without moving.
    pub fn jump_to(&mut self, index: usize) -> Result<(), LabError> {
        if index >= self.models.len() {
            return Err(LabError::IndexOutOfRange {
                what: "model",
                index,
                len: self.models.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &ModelRecord {
        &self.models[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.models.len() - 1
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// `"2 of 4"`
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.current + 1, self.models.len())
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| TimelineEntry {
                label: m.timeline_label(),
                active: i == self.current,
            })
            .collect()
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            current_index: self.current,
            model: self.current().clone(),
            is_first: self.is_first(),
            is_last: self.is_last(),
            position_label: self.position_label(),
            timeline: self.timeline(),
        }
    }

    fn apply(&mut self, command: &LabCommand) -> Result<bool, LabError> {
        match command {
            LabCommand::NextModel => {
                self.next();
            }
            LabCommand::PreviousModel => {
                self.previous();
            }
            LabCommand::JumpToModel { index } => self.jump_to(*index)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl Activity for SequenceNavigator {
    fn update(&mut self, ctx: &mut LabContext, commands: &CommandQueue) {
        for command in commands.iter() {
            match self.apply(command) {
                Ok(true) => {
                    log::debug!("navigator: now at {}", self.current().id);
                    ctx.emit(LabEvent::with(
                        event_kinds::MODEL_CHANGED,
                        self.current as f32,
                        0.0,
                        0.0,
                    ));
                }
                Ok(false) => {}
                Err(err) => {
                    log::warn!("navigator: rejected {:?}: {}", command, err);
                    ctx.emit(LabEvent::with(
                        event_kinds::COMMAND_REJECTED,
                        command.kind() as f32,
                        0.0,
                        0.0,
                    ));
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigatorSnapshot {
    pub current_index: usize,
    pub model: ModelRecord,
    pub is_first: bool,
    pub is_last: bool,
    pub position_label: String,
    pub timeline: Vec<TimelineEntry>,
}
