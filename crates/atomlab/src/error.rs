use std::fmt;

/// Errors raised by the lab's activities, catalogs and configuration.
///
/// A failed operation never mutates state; callers may retry immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// `confirm()` was called with no option selected.
    AnswerRequired,

    /// A caller passed an index outside the catalog it addresses.
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A one-shot timer was armed while another was still pending.
    TimerAlreadyArmed,

    /// No atom in the catalog carries this symbol.
    UnknownAtom(String),

    /// Embedded catalog data failed to parse or broke a data invariant.
    Catalog(String),

    /// Configuration could not be parsed or is out of bounds.
    Config(String),
}

impl LabError {
    /// True for the recoverable, user-facing failure class.
    pub fn is_validation(&self) -> bool {
        matches!(self, LabError::AnswerRequired)
    }
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::AnswerRequired => {
                write!(f, "Please select an answer before proceeding")
            }
            LabError::IndexOutOfRange { what, index, len } => {
                write!(f, "{what} index {index} out of range (len {len})")
            }
            LabError::TimerAlreadyArmed => write!(f, "A timer is already pending"),
            LabError::UnknownAtom(symbol) => write!(f, "Unknown atom symbol: {symbol}"),
            LabError::Catalog(msg) => write!(f, "Catalog error: {msg}"),
            LabError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for LabError {}
