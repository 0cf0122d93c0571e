//! One-shot deferred task scheduling against the virtual clock.
//!
//! A timer is armed with a delay, polled with the current time, and fires at
//! most once. Cancelling (or dropping the owner) guarantees it never fires.

use crate::error::LabError;

/// Identifies one arming of a [`OneShotTimer`].
/// The generation increases on every arm, so a handle from a cancelled
/// arming never matches a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u32,
    due_ms: u64,
}

impl TimerHandle {
    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }
}

/// A single cancellable deferred action slot.
#[derive(Debug, Default)]
pub struct OneShotTimer {
    pending: Option<TimerHandle>,
    generation: u32,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire `delay_ms` after `now_ms`.
    /// Fails with `TimerAlreadyArmed` if an earlier arming is still pending.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) -> Result<TimerHandle, LabError> {
        if self.pending.is_some() {
            return Err(LabError::TimerAlreadyArmed);
        }
        self.generation = self.generation.wrapping_add(1);
        let handle = TimerHandle {
            generation: self.generation,
            due_ms: now_ms.saturating_add(delay_ms),
        };
        self.pending = Some(handle);
        Ok(handle)
    }

    /// Cancel the pending arming. Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire if due. Returns the handle of the arming that fired, exactly once.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerHandle> {
        match self.pending {
            Some(handle) if now_ms >= handle.due_ms => self.pending.take(),
            _ => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `handle` is the arming currently pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending == Some(handle)
    }

    /// Milliseconds until the pending arming fires, if any.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.pending.map(|h| h.due_ms.saturating_sub(now_ms))
    }
}
