use serde::Deserialize;

use crate::api::types::LabEvent;
use crate::error::LabError;
use crate::input::queue::CommandQueue;

/// Configuration for the lab, optionally supplied by the shell as JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Delay between revealing an answer and moving on (default: 2000 ms).
    pub reveal_delay_ms: u64,
    /// Radius of the innermost shell in layout units (default: 60).
    pub base_radius: f32,
    /// Radius increment per shell (default: 50).
    pub radius_step: f32,
    /// Shared centre of the atom layout (default: middle of a 300×300 view).
    pub center: [f32; 2],
    /// Maximum number of outbound events per frame (default: 32).
    pub max_events: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 2000,
            base_radius: 60.0,
            radius_step: 50.0,
            center: [150.0, 150.0],
            max_events: 32,
        }
    }
}

impl LabConfig {
    /// Parse a (possibly partial) JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LabError> {
        let config: LabConfig =
            serde_json::from_str(json).map_err(|e| LabError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LabError> {
        if !(self.base_radius > 0.0) {
            return Err(LabError::Config(format!(
                "base_radius must be positive, got {}",
                self.base_radius
            )));
        }
        if !(self.radius_step > 0.0) {
            return Err(LabError::Config(format!(
                "radius_step must be positive, got {}",
                self.radius_step
            )));
        }
        if self.max_events == 0 {
            return Err(LabError::Config("max_events must be at least 1".into()));
        }
        Ok(())
    }
}

/// The contract every interactive component of the lab fulfils.
///
/// Activities never talk to each other; the runner hands each one the same
/// command queue and it picks out the commands it understands.
pub trait Activity {
    /// Called once after construction, before the first update.
    fn init(&mut self, _ctx: &mut LabContext) {}

    /// Apply pending commands and advance any scheduled work to `ctx.now_ms()`.
    fn update(&mut self, ctx: &mut LabContext, commands: &CommandQueue);

    /// Release scheduled work. Called on teardown and before the activity is dropped.
    fn on_teardown(&mut self) {}
}

/// Per-frame state shared with activities: the virtual time and the outbound events.
pub struct LabContext {
    now_ms: u64,
    events: Vec<LabEvent>,
    max_events: usize,
}

impl LabContext {
    pub fn new(max_events: usize) -> Self {
        Self {
            now_ms: 0,
            events: Vec::with_capacity(max_events),
            max_events,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_now_ms(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Emit an event to be forwarded to the shell. Events past capacity are dropped.
    pub fn emit(&mut self, event: LabEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping event kind {}", event.kind);
        }
    }

    pub fn events(&self) -> &[LabEvent] {
        &self.events
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for LabContext {
    fn default() -> Self {
        Self::new(LabConfig::default().max_events)
    }
}
