use bytemuck::{Pod, Zeroable};

/// An event communicated from Rust to the shell through a flat f32 buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
///
/// Kinds are listed in [`crate::bridge::protocol::event_kinds`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LabEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl LabEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn with(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// One of the three independent display toggles of the atom viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToggle {
    Electrons,
    Orbits,
    Animation,
}

impl DisplayToggle {
    /// Decode the wire code used by the shell (0 = electrons, 1 = orbits, 2 = animation).
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(DisplayToggle::Electrons),
            1 => Some(DisplayToggle::Orbits),
            2 => Some(DisplayToggle::Animation),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            DisplayToggle::Electrons => 0,
            DisplayToggle::Orbits => 1,
            DisplayToggle::Animation => 2,
        }
    }
}
