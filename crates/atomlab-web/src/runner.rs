use atomlab::{
    Activity, AtomLab, CommandQueue, EventLayout, LabCommand, LabConfig, LabContext, LabError,
    LabSnapshot, VirtualClock,
};

/// Wires the lab core to the browser loop.
///
/// The shell pushes commands between frames and calls [`LabRunner::tick`]
/// once per animation frame. `wasm-bindgen` cannot export this struct's
/// lifetime model directly, so `lib.rs` keeps one in a `thread_local!`.
pub struct LabRunner {
    lab: AtomLab,
    ctx: LabContext,
    commands: CommandQueue,
    clock: VirtualClock,
    config: LabConfig,
    layout: EventLayout,
    initialized: bool,
}

impl LabRunner {
    pub fn new(config: LabConfig) -> Result<Self, LabError> {
        let lab = AtomLab::new(&config)?;
        let layout = EventLayout::from_config(&config);
        Ok(Self {
            lab,
            ctx: LabContext::new(config.max_events),
            commands: CommandQueue::new(),
            clock: VirtualClock::new(),
            config,
            layout,
            initialized: false,
        })
    }

    /// Initialize the activities. Call once after construction.
    pub fn init(&mut self) {
        self.lab.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Queue a command for the next tick.
    pub fn push_command(&mut self, command: LabCommand) {
        self.commands.push(command);
    }

    /// Queue a wire command. Unknown kinds are logged and dropped.
    pub fn push_wire_command(&mut self, kind: u32, a: f32) {
        match LabCommand::from_wire(kind, a) {
            Some(command) => self.push_command(command),
            None => log::warn!("ignoring malformed command kind={} a={}", kind, a),
        }
    }

    /// Run one frame: advance the clock, apply queued commands, fire due timers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let now = self.clock.accumulate(dt);
        self.ctx.set_now_ms(now);
        self.lab.update(&mut self.ctx, &self.commands);

        // Drain commands after update
        self.commands.drain();
    }

    /// Advance by exact milliseconds. Same as `tick` but without float deltas.
    pub fn tick_ms(&mut self, ms: u64) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        let now = self.clock.advance_ms(ms);
        self.ctx.set_now_ms(now);
        self.lab.update(&mut self.ctx, &self.commands);
        self.commands.drain();
    }

    /// Tear down activities, cancelling anything still scheduled.
    pub fn shutdown(&mut self) {
        if self.initialized {
            self.lab.on_teardown();
            self.initialized = false;
            log::info!("lab runner shut down at {} ms", self.clock.now_ms());
        }
    }

    pub fn lab(&self) -> &AtomLab {
        &self.lab
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    pub fn snapshot(&self) -> LabSnapshot {
        self.lab.snapshot(self.clock.now_ms())
    }

    /// Snapshot as JSON. Serialization of these plain structs cannot fail in
    /// practice; if it does, the error is logged and an empty object returned.
    pub fn snapshot_json(&self) -> String {
        self.snapshot().to_json().unwrap_or_else(|e| {
            log::error!("snapshot serialization failed: {}", e);
            "{}".to_string()
        })
    }

    // ---- Pointer accessors for event buffer reads ----

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events().len() as u32
    }

    pub fn event_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.ctx.events())
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    /// Floats the shell must reserve to read a full frame of events.
    pub fn event_buffer_floats(&self) -> u32 {
        self.layout.event_data_floats as u32
    }
}

impl Drop for LabRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomlab::bridge::protocol::{command_kinds, event_kinds};
    use atomlab::QuizState;

    fn runner() -> LabRunner {
        let mut r = LabRunner::new(LabConfig::default()).unwrap();
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = LabRunner::new(LabConfig::default()).unwrap();
        r.push_command(LabCommand::NextModel);
        r.tick(0.016);
        assert_eq!(r.now_ms(), 0);
        assert_eq!(r.lab().navigator().current_index(), 0);
        assert_eq!(r.pending_commands(), 1);
    }

    #[test]
    fn commands_drain_after_tick() {
        let mut r = runner();
        r.push_wire_command(command_kinds::NEXT_MODEL, 0.0);
        r.push_wire_command(command_kinds::SELECT_ATOM, 2.0);
        r.push_wire_command(12345, 0.0);
        assert_eq!(r.pending_commands(), 2);

        r.tick(0.016);
        assert_eq!(r.pending_commands(), 0);
        assert_eq!(r.lab().navigator().current_index(), 1);
        assert_eq!(r.lab().viewer().selected().symbol, "C");
        assert_eq!(r.events_len(), 2);
    }

    #[test]
    fn reveal_advances_after_two_seconds_of_frames() {
        let mut r = runner();
        r.push_command(LabCommand::SelectOption { option: 1 });
        r.push_command(LabCommand::Confirm);
        r.tick(0.0);
        assert!(r.lab().quiz().is_revealed());

        for _ in 0..119 {
            r.tick(1.0 / 60.0);
        }
        assert!(r.lab().quiz().is_revealed(), "advanced early at {} ms", r.now_ms());

        r.tick(0.1);
        assert_eq!(r.lab().quiz().state(), QuizState::Answering { question: 1 });
        let floats = r.event_floats();
        assert_eq!(floats[0], event_kinds::QUESTION_ADVANCED);
        assert_eq!(floats[1], 1.0);
    }

    #[test]
    fn answer_required_event_is_exposed() {
        let mut r = runner();
        r.push_wire_command(command_kinds::CONFIRM, 0.0);
        r.tick_ms(16);
        assert_eq!(r.events_len(), 1);
        assert_eq!(r.event_floats()[0], event_kinds::ANSWER_REQUIRED);
    }

    #[test]
    fn shutdown_cancels_pending_advance() {
        let mut r = runner();
        r.push_command(LabCommand::SelectOption { option: 0 });
        r.push_command(LabCommand::Confirm);
        r.tick_ms(0);
        assert!(r.lab().quiz().has_pending_advance());
        r.shutdown();
        assert!(!r.lab().quiz().has_pending_advance());
        r.tick_ms(5000);
        assert!(r.lab().quiz().is_revealed());
    }

    #[test]
    fn buffer_sizes_follow_config() {
        let config = LabConfig::from_json(r#"{ "max_events": 8 }"#).unwrap();
        let r = LabRunner::new(config).unwrap();
        assert_eq!(r.max_events(), 8);
        assert_eq!(r.event_buffer_floats(), 32);
    }

    #[test]
    fn snapshot_json_is_valid() {
        let r = runner();
        let value: serde_json::Value = serde_json::from_str(&r.snapshot_json()).unwrap();
        assert_eq!(value["quiz"]["total"], 5);
        assert_eq!(value["navigator"]["position_label"], "1 of 4");
    }
}
