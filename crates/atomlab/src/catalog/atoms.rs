//! Atom catalog entries for the viewer.

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Embed the atom catalog at compile time.
pub(crate) const ATOMS_JSON: &str = include_str!("../../data/atoms.json");

/// Shell letters in spectroscopic order (K holds 2, L holds 8, M holds 18, ...).
const SHELL_LETTERS: [char; 7] = ['K', 'L', 'M', 'N', 'O', 'P', 'Q'];

/// One atom of the viewer catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub name: String,
    pub symbol: String,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    /// Electron count per shell, innermost first.
    pub shells: Vec<u32>,
}

impl AtomRecord {
    /// Atomic number (number of protons).
    pub fn atomic_number(&self) -> u32 {
        self.protons
    }

    /// Mass number (protons + neutrons).
    pub fn mass_number(&self) -> u32 {
        self.protons + self.neutrons
    }

    /// Check the record's own data invariants.
    pub fn validate(&self) -> Result<(), LabError> {
        if self.protons == 0 || self.electrons == 0 {
            return Err(LabError::Catalog(format!(
                "{}: proton and electron counts must be positive",
                self.name
            )));
        }
        if self.shells.is_empty() || self.shells.contains(&0) {
            return Err(LabError::Catalog(format!(
                "{}: shell occupancies must be positive",
                self.name
            )));
        }
        let sum: u32 = self.shells.iter().sum();
        if sum != self.electrons {
            return Err(LabError::Catalog(format!(
                "{}: shells hold {} electrons, expected {}",
                self.name, sum, self.electrons
            )));
        }
        Ok(())
    }
}

/// Letter name of a shell (`0 → 'K'`). Falls back to `'?'` past the seventh shell.
pub fn shell_letter(shell_index: usize) -> char {
    SHELL_LETTERS.get(shell_index).copied().unwrap_or('?')
}

/// Human-readable occupancy label for a shell, e.g. `"Shell 2: 4e⁻"`.
pub fn shell_label(shell_index: usize, electrons: u32) -> String {
    format!("Shell {}: {}e⁻", shell_index + 1, electrons)
}

pub(crate) fn parse_atoms(json: &str) -> Result<Vec<AtomRecord>, LabError> {
    let atoms: Vec<AtomRecord> = serde_json::from_str(json)
        .map_err(|e| LabError::Catalog(format!("atoms: {e}")))?;
    for atom in &atoms {
        atom.validate()?;
    }
    Ok(atoms)
}
