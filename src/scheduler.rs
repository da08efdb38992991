//! Timer and frame scheduling behind a trait, so animations can be driven by the
//! browser event loop or stepped deterministically.

#[cfg(test)]
use std::cell::RefCell;

pub type TimerId = i32;

pub trait Scheduler {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;
    fn clear_timeout(&self, id: TimerId);
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

#[cfg(test)]
struct PendingTimer {
    id: TimerId,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[cfg(test)]
#[derive(Default)]
struct ManualState {
    now_ms: u64,
    next_id: TimerId,
    timers: Vec<PendingTimer>,
    frames: Vec<Box<dyn FnOnce()>>,
}

/// Virtual clock. Timers fire in due order (ties in scheduling order) while
/// `advance` moves time forward; frames run on `run_frame`.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now_ms().saturating_add(ms);

        while let Some(timer) = self.pop_due(target) {
            (timer.callback)();
        }

        self.state.borrow_mut().now_ms = target;
    }

    /// Runs the callbacks queued before this frame; anything they request lands
    /// in the next frame.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }

    fn pop_due(&self, target: u64) -> Option<PendingTimer> {
        let mut state = self.state.borrow_mut();
        let position = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= target)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
            .map(|(index, _)| index)?;

        let timer = state.timers.remove(position);
        state.now_ms = timer.due_ms;
        Some(timer)
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.timers.push(PendingTimer {
            id,
            due_ms,
            callback,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.state.borrow_mut().timers.retain(|timer| timer.id != id);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.state.borrow_mut().frames.push(callback);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Scheduler, TimerId};
    use crate::error::UiError;
    use crate::telemetry::{log_event, LogLevel};
    use gloo::timers::callback::Timeout;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{window, Window};

    /// Owns every pending `Timeout` so a cleared or fired timer releases its
    /// closure.
    pub struct BrowserScheduler {
        window: Window,
        next_id: Cell<TimerId>,
        timers: Rc<RefCell<HashMap<TimerId, Timeout>>>,
    }

    impl BrowserScheduler {
        pub fn new() -> Result<Self, UiError> {
            let window = window().ok_or(UiError::MissingWindow)?;
            Ok(Self {
                window,
                next_id: Cell::new(0),
                timers: Rc::new(RefCell::new(HashMap::new())),
            })
        }
    }

    impl Scheduler for BrowserScheduler {
        fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
            let id = self.next_id.get().wrapping_add(1);
            self.next_id.set(id);

            let timers = Rc::downgrade(&self.timers);
            let timeout = Timeout::new(delay_ms, move || {
                let fired = timers.upgrade().and_then(|timers| {
                    let handle = timers.borrow_mut().remove(&id);
                    handle
                });
                callback();
                drop(fired);
            });
            self.timers.borrow_mut().insert(id, timeout);
            id
        }

        fn clear_timeout(&self, id: TimerId) {
            // Dropping a `Timeout` clears it and frees its closure.
            let cancelled = self.timers.borrow_mut().remove(&id);
            drop(cancelled);
        }

        fn request_frame(&self, callback: Box<dyn FnOnce()>) {
            let handler = Closure::once_into_js(move || callback());

            if let Err(error) = self.window.request_animation_frame(handler.unchecked_ref()) {
                let error = UiError::from(error);
                log_event(
                    LogLevel::Warn,
                    "scheduler.frame_failed",
                    json!({ "error": error.to_string() }),
                );
            }
        }
    }
}
