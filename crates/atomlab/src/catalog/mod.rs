//! Read-only catalogs: atoms, historical models and quiz questions.
//!
//! All three are embedded JSON parsed once into a [`Library`]. Nothing in the
//! crate mutates a catalog after loading.

pub mod atoms;
pub mod models;
pub mod questions;

pub use atoms::{shell_label, shell_letter, AtomRecord};
pub use models::{ModelRecord, ModelVisual};
pub use questions::{QuizQuestion, OPTION_COUNT};

use crate::error::LabError;

/// The three catalogs, validated.
#[derive(Debug, Clone)]
pub struct Library {
    pub atoms: Vec<AtomRecord>,
    pub models: Vec<ModelRecord>,
    pub questions: Vec<QuizQuestion>,
}

impl Library {
    /// Load the catalogs embedded at compile time.
    pub fn load() -> Result<Self, LabError> {
        Self::from_json(atoms::ATOMS_JSON, models::MODELS_JSON, questions::QUESTIONS_JSON)
    }

    /// Parse and validate catalogs from JSON strings. Record-level invariants
    /// are checked here; each activity rejects an empty catalog when built.
    pub fn from_json(atoms_json: &str, models_json: &str, questions_json: &str) -> Result<Self, LabError> {
        Ok(Self {
            atoms: atoms::parse_atoms(atoms_json)?,
            models: models::parse_models(models_json)?,
            questions: questions::parse_questions(questions_json)?,
        })
    }
}
