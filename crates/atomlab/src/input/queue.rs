use crate::api::types::DisplayToggle;
use crate::bridge::protocol::command_kinds;

/// Inbound commands from the presentation shell.
/// Each one is addressed to exactly one activity.
#[derive(Debug, Clone, PartialEq)]
pub enum LabCommand {
    /// Select the atom at this catalog index.
    SelectAtom { index: usize },
    /// Select the atom with this chemical symbol.
    SelectAtomBySymbol { symbol: String },
    /// Flip one display toggle of the atom viewer.
    Toggle { toggle: DisplayToggle },
    /// Advance to the next atomic model (wraps).
    NextModel,
    /// Go back to the previous atomic model (wraps).
    PreviousModel,
    /// Jump straight to a model on the timeline.
    JumpToModel { index: usize },
    /// Choose an answer option for the active question.
    SelectOption { option: usize },
    /// Lock in the chosen option.
    Confirm,
    /// Start the quiz over.
    ResetQuiz,
}

impl LabCommand {
    /// Decode a wire command `(kind, a)` sent by the shell.
    /// `a` carries the index or toggle code where the command needs one.
    pub fn from_wire(kind: u32, a: f32) -> Option<Self> {
        let index = if a.is_finite() && a >= 0.0 && a.fract() == 0.0 {
            Some(a as usize)
        } else {
            None
        };
        match kind {
            command_kinds::SELECT_ATOM => index.map(|index| LabCommand::SelectAtom { index }),
            command_kinds::TOGGLE => DisplayToggle::from_code(a as u32)
                .filter(|_| index.is_some())
                .map(|toggle| LabCommand::Toggle { toggle }),
            command_kinds::NEXT_MODEL => Some(LabCommand::NextModel),
            command_kinds::PREVIOUS_MODEL => Some(LabCommand::PreviousModel),
            command_kinds::JUMP_TO_MODEL => index.map(|index| LabCommand::JumpToModel { index }),
            command_kinds::SELECT_OPTION => index.map(|option| LabCommand::SelectOption { option }),
            command_kinds::CONFIRM => Some(LabCommand::Confirm),
            command_kinds::RESET_QUIZ => Some(LabCommand::ResetQuiz),
            _ => None,
        }
    }

    /// Wire kind of this command. Selection by symbol has no wire form of its
    /// own and reports as `SELECT_ATOM`.
    pub fn kind(&self) -> u32 {
        match self {
            LabCommand::SelectAtom { .. } | LabCommand::SelectAtomBySymbol { .. } => {
                command_kinds::SELECT_ATOM
            }
            LabCommand::Toggle { .. } => command_kinds::TOGGLE,
            LabCommand::NextModel => command_kinds::NEXT_MODEL,
            LabCommand::PreviousModel => command_kinds::PREVIOUS_MODEL,
            LabCommand::JumpToModel { .. } => command_kinds::JUMP_TO_MODEL,
            LabCommand::SelectOption { .. } => command_kinds::SELECT_OPTION,
            LabCommand::Confirm => command_kinds::CONFIRM,
            LabCommand::ResetQuiz => command_kinds::RESET_QUIZ,
        }
    }
}

/// A queue of inbound commands.
/// The shell pushes commands between frames; the runner drains them each tick.
pub struct CommandQueue {
    commands: Vec<LabCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: LabCommand) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<LabCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Iterate over pending commands in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &LabCommand> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<LabCommand> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = LabCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
