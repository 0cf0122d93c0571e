//! Atom viewer: a selected catalog atom, three display toggles, and the
//! derived Bohr-style layout of shells and electrons.
//!
//! The layout is a pure function of (atom, toggles, geometry) and is rebuilt
//! on every change. Rotation, if any, belongs to the display layer.

use glam::Vec2;
use serde::Serialize;

use crate::api::activity::{Activity, LabConfig, LabContext};
use crate::api::types::{DisplayToggle, LabEvent};
use crate::bridge::protocol::event_kinds;
use crate::catalog::{shell_label, shell_letter, AtomRecord};
use crate::error::LabError;
use crate::input::queue::{CommandQueue, LabCommand};

/// Radii of the concentric shells around a shared centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellGeometry {
    /// Radius of the innermost shell.
    pub base_radius: f32,
    /// Increment per shell. Must be positive so radii increase outward.
    pub radius_step: f32,
    pub center: Vec2,
}

impl ShellGeometry {
    pub fn from_config(config: &LabConfig) -> Self {
        Self {
            base_radius: config.base_radius,
            radius_step: config.radius_step,
            center: Vec2::from_array(config.center),
        }
    }

    /// Radius of shell `index` (0 = innermost).
    pub fn shell_radius(&self, index: usize) -> f32 {
        self.base_radius + index as f32 * self.radius_step
    }
}

impl Default for ShellGeometry {
    fn default() -> Self {
        Self::from_config(&LabConfig::default())
    }
}

/// The three independent display flags. All start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayToggles {
    pub show_electrons: bool,
    pub show_orbits: bool,
    pub animate: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_electrons: true,
            show_orbits: true,
            animate: true,
        }
    }
}

impl DisplayToggles {
    /// Flip one flag and return its new value.
    pub fn flip(&mut self, toggle: DisplayToggle) -> bool {
        let flag = match toggle {
            DisplayToggle::Electrons => &mut self.show_electrons,
            DisplayToggle::Orbits => &mut self.show_orbits,
            DisplayToggle::Animation => &mut self.animate,
        };
        *flag = !*flag;
        *flag
    }

    pub fn get(&self, toggle: DisplayToggle) -> bool {
        match toggle {
            DisplayToggle::Electrons => self.show_electrons,
            DisplayToggle::Orbits => self.show_orbits,
            DisplayToggle::Animation => self.animate,
        }
    }
}

/// One electron placed on its shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronSlot {
    /// Angle from the +x axis in degrees.
    pub angle_deg: f32,
    pub position: Vec2,
}

/// One shell of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    pub index: usize,
    pub radius: f32,
    pub electron_count: u32,
    /// Whether the orbit ring is drawn.
    pub orbit_visible: bool,
    /// Empty when electrons are hidden.
    pub electrons: Vec<ElectronSlot>,
}

/// Everything the display layer needs to draw the selected atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomLayout {
    pub center: Vec2,
    pub shells: Vec<ShellLayout>,
    /// Passed through for the display layer's rotation loop.
    pub animate: bool,
}

impl AtomLayout {
    pub fn radii(&self) -> Vec<f32> {
        self.shells.iter().map(|s| s.radius).collect()
    }

    pub fn electron_count(&self) -> usize {
        self.shells.iter().map(|s| s.electrons.len()).sum()
    }
}

/// Compute the layout for an atom.
///
/// Shell `i` sits at `base_radius + i * radius_step`. Its `c` electrons are
/// spaced `360 / c` degrees apart starting at 0°. Radii advance for every
/// shell regardless of which toggles are on.
pub fn compute_layout(atom: &AtomRecord, toggles: DisplayToggles, geometry: &ShellGeometry) -> AtomLayout {
    let shells = atom
        .shells
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let radius = geometry.shell_radius(index);
            let electrons = if toggles.show_electrons && count > 0 {
                let step = 360.0 / count as f32;
                (0..count)
                    .map(|j| {
                        let angle_deg = j as f32 * step;
                        ElectronSlot {
                            angle_deg,
                            position: geometry.center
                                + Vec2::from_angle(angle_deg.to_radians()) * radius,
                        }
                    })
                    .collect()
            } else {
                Vec::new()
            };
            ShellLayout {
                index,
                radius,
                electron_count: count,
                orbit_visible: toggles.show_orbits,
                electrons,
            }
        })
        .collect();

    AtomLayout {
        center: geometry.center,
        shells,
        animate: toggles.animate,
    }
}

/// Selected atom, toggles and cached layout.
pub struct SelectionViewer {
    atoms: Vec<AtomRecord>,
    selected: usize,
    toggles: DisplayToggles,
    geometry: ShellGeometry,
    layout: AtomLayout,
}

impl SelectionViewer {
    /// Create a viewer over a non-empty catalog, selecting its first atom.
    pub fn new(atoms: Vec<AtomRecord>, geometry: ShellGeometry) -> Result<Self, LabError> {
        let first = atoms
            .first()
            .ok_or_else(|| LabError::Catalog("atom catalog is empty".into()))?;
        let toggles = DisplayToggles::default();
        let layout = compute_layout(first, toggles, &geometry);
        Ok(Self {
            atoms,
            selected: 0,
            toggles,
            geometry,
            layout,
        })
    }

    /// Select the atom at `index` in the catalog.
    pub fn select_atom(&mut self, index: usize) -> Result<(), LabError> {
        if index >= self.atoms.len() {
            return Err(LabError::IndexOutOfRange {
                what: "atom",
                index,
                len: self.atoms.len(),
            });
        }
        self.selected = index;
        self.relayout();
        log::debug!("viewer: selected {}", self.atoms[index].name);
        Ok(())
    }

    /// Select by chemical symbol (case-sensitive, e.g. "He"). Returns the index.
    pub fn select_by_symbol(&mut self, symbol: &str) -> Result<usize, LabError> {
        let index = self
            .atoms
            .iter()
            .position(|a| a.symbol == symbol)
            .ok_or_else(|| LabError::UnknownAtom(symbol.to_string()))?;
        self.select_atom(index)?;
        Ok(index)
    }

    /// Flip one display toggle. Returns the new value.
    pub fn toggle(&mut self, toggle: DisplayToggle) -> bool {
        let value = self.toggles.flip(toggle);
        self.relayout();
        value
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(&self.atoms[self.selected], self.toggles, &self.geometry);
    }

    pub fn selected(&self) -> &AtomRecord {
        &self.atoms[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    pub fn layout(&self) -> &AtomLayout {
        &self.layout
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        let atom = self.selected();
        ViewerSnapshot {
            selected_index: self.selected,
            atom: atom.clone(),
            atomic_number: atom.atomic_number(),
            mass_number: atom.mass_number(),
            configuration: atom
                .shells
                .iter()
                .enumerate()
                .map(|(i, &n)| shell_label(i, n))
                .collect(),
            toggles: self.toggles,
            center: self.layout.center.to_array(),
            shells: self
                .layout
                .shells
                .iter()
                .map(|shell| ShellSnapshot {
                    index: shell.index,
                    letter: shell_letter(shell.index),
                    radius: shell.radius,
                    electron_count: shell.electron_count,
                    orbit_visible: shell.orbit_visible,
                    electrons: shell
                        .electrons
                        .iter()
                        .map(|e| ElectronSnapshot {
                            angle_deg: e.angle_deg,
                            position: e.position.to_array(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn apply(&mut self, ctx: &mut LabContext, command: &LabCommand) -> Result<(), LabError> {
        match command {
            LabCommand::SelectAtom { index } => {
                self.select_atom(*index)?;
                ctx.emit(LabEvent::with(event_kinds::ATOM_SELECTED, *index as f32, 0.0, 0.0));
            }
            LabCommand::SelectAtomBySymbol { symbol } => {
                let index = self.select_by_symbol(symbol)?;
                ctx.emit(LabEvent::with(event_kinds::ATOM_SELECTED, index as f32, 0.0, 0.0));
            }
            LabCommand::Toggle { toggle } => {
                let value = self.toggle(*toggle);
                ctx.emit(LabEvent::with(
                    event_kinds::TOGGLE_CHANGED,
                    toggle.code() as f32,
                    if value { 1.0 } else { 0.0 },
                    0.0,
                ));
            }
            _ => {}
        }
        Ok(())
    }
}

impl Activity for SelectionViewer {
    fn init(&mut self, _ctx: &mut LabContext) {
        log::info!("viewer: {} atoms, showing {}", self.atoms.len(), self.selected().name);
    }

    fn update(&mut self, ctx: &mut LabContext, commands: &CommandQueue) {
        for command in commands.iter() {
            if let Err(err) = self.apply(ctx, command) {
                log::warn!("viewer: rejected {:?}: {}", command, err);
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

/// Outbound view of the viewer.
#[derive(Debug, Clone, Serialize)]
pub struct ViewerSnapshot {
    pub selected_index: usize,
    pub atom: AtomRecord,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub configuration: Vec<String>,
    pub toggles: DisplayToggles,
    pub center: [f32; 2],
    pub shells: Vec<ShellSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellSnapshot {
    pub index: usize,
    pub letter: char,
    pub radius: f32,
    pub electron_count: u32,
    pub orbit_visible: bool,
    pub electrons: Vec<ElectronSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElectronSnapshot {
    pub angle_deg: f32,
    pub position: [f32; 2],
}
