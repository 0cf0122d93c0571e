pub mod runner;

pub use runner::LabRunner;

use std::cell::RefCell;

use atomlab::bridge::protocol::command_kinds;
use atomlab::{LabCommand, LabConfig, PROTOCOL_VERSION};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<LabRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Returns `None` (and logs) before `lab_init()`.
fn with_runner<R>(f: impl FnOnce(&mut LabRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("lab not initialized, call lab_init() first");
                None
            }
        }
    })
}

/// Replace the live runner, tearing down the previous one first.
fn install(config: LabConfig) -> bool {
    let mut runner = match LabRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            log::error!("atomlab: failed to start: {}", e);
            return false;
        }
    };
    runner.init();
    RUNNER.with(|cell| {
        // Dropping the old runner cancels its pending timers.
        *cell.borrow_mut() = Some(runner);
    });
    true
}

#[wasm_bindgen]
pub fn lab_init() -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let ok = install(LabConfig::default());
    if ok {
        log::info!("atomlab: initialized (protocol v{})", PROTOCOL_VERSION);
    }
    ok
}

/// Restart with a JSON configuration. Missing fields keep their defaults.
#[wasm_bindgen]
pub fn lab_configure(json: &str) -> bool {
    match LabConfig::from_json(json) {
        Ok(config) => install(config),
        Err(e) => {
            log::warn!("atomlab: rejected configuration: {}", e);
            false
        }
    }
}

#[wasm_bindgen]
pub fn lab_shutdown() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.shutdown();
        }
    });
}

#[wasm_bindgen]
pub fn lab_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Generic command entry point: `kind` from the protocol's command kinds.
#[wasm_bindgen]
pub fn lab_command(kind: u32, a: f32) {
    with_runner(|r| r.push_wire_command(kind, a));
}

// ---- Atom viewer ----

#[wasm_bindgen]
pub fn lab_select_atom(index: u32) {
    with_runner(|r| r.push_command(LabCommand::SelectAtom { index: index as usize }));
}

#[wasm_bindgen]
pub fn lab_select_atom_symbol(symbol: &str) {
    let symbol = symbol.to_string();
    with_runner(|r| r.push_command(LabCommand::SelectAtomBySymbol { symbol }));
}

#[wasm_bindgen]
pub fn lab_toggle(code: u32) {
    with_runner(|r| r.push_wire_command(command_kinds::TOGGLE, code as f32));
}

// ---- Model timeline ----

#[wasm_bindgen]
pub fn lab_next_model() {
    with_runner(|r| r.push_command(LabCommand::NextModel));
}

#[wasm_bindgen]
pub fn lab_previous_model() {
    with_runner(|r| r.push_command(LabCommand::PreviousModel));
}

#[wasm_bindgen]
pub fn lab_jump_to_model(index: u32) {
    with_runner(|r| r.push_command(LabCommand::JumpToModel { index: index as usize }));
}

// ---- Knowledge check ----

#[wasm_bindgen]
pub fn lab_select_option(option: u32) {
    with_runner(|r| r.push_command(LabCommand::SelectOption { option: option as usize }));
}

#[wasm_bindgen]
pub fn lab_confirm() {
    with_runner(|r| r.push_command(LabCommand::Confirm));
}

#[wasm_bindgen]
pub fn lab_reset_quiz() {
    with_runner(|r| r.push_command(LabCommand::ResetQuiz));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json()).unwrap_or_else(|| "{}".to_string())
}

#[wasm_bindgen]
pub fn get_lab_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_lab_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_event_buffer_floats() -> u32 {
    with_runner(|r| r.event_buffer_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_now_ms() -> f64 {
    with_runner(|r| r.now_ms() as f64).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_protocol_version() -> u32 {
    PROTOCOL_VERSION
}
