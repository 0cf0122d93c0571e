//! Historical atomic models for the timeline navigator.

use serde::{Deserialize, Serialize};

use crate::error::LabError;

pub(crate) const MODELS_JSON: &str = include_str!("../../data/models.json");

/// Static drawing that accompanies a model. The shell renders these; the
/// numbers are in the same layout units as the atom viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelVisual {
    /// A single solid ball.
    SolidSphere,
    /// A positive sphere with electrons embedded in it.
    PlumPudding { electrons: u32 },
    /// A nucleus with electrons on one orbit.
    Nuclear { orbit_radius: f32, electrons: u32 },
    /// A nucleus with concentric fixed orbits, one electron each.
    Bohr { orbit_radii: Vec<f32> },
}

/// One historical atomic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    pub name: String,
    pub scientist: String,
    pub year: i32,
    pub description: String,
    pub key_features: Vec<String>,
    pub limitations: Vec<String>,
    pub visual: ModelVisual,
}

impl ModelRecord {
    /// Timeline button caption, e.g. `"1913 - Niels Bohr"`.
    pub fn timeline_label(&self) -> String {
        format!("{} - {}", self.year, self.scientist)
    }
}

pub(crate) fn parse_models(json: &str) -> Result<Vec<ModelRecord>, LabError> {
    serde_json::from_str(json).map_err(|e| LabError::Catalog(format!("models: {e}")))
}
