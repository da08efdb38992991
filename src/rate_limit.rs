use std::cell::Cell;
use std::rc::Rc;

use crate::scheduler::{Scheduler, TimerId};

/// Runs at most one callback per animation frame; calls made while a frame is
/// pending are dropped.
pub struct FrameThrottle {
    scheduler: Rc<dyn Scheduler>,
    ticking: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            ticking: Rc::new(Cell::new(false)),
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.ticking.get()
    }

    pub fn call(&self, callback: impl FnOnce() + 'static) -> bool {
        if self.ticking.get() {
            return false;
        }

        self.ticking.set(true);
        let ticking = self.ticking.clone();
        self.scheduler.request_frame(Box::new(move || {
            callback();
            ticking.set(false);
        }));
        true
    }
}

/// Delays `action` until `delay_ms` pass without another call.
pub struct Debounce {
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
    pending: Rc<Cell<Option<TimerId>>>,
    action: Rc<dyn Fn()>,
}

impl Debounce {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Rc::new(Cell::new(None)),
            action: Rc::new(action),
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn call(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.clear_timeout(id);
        }

        let action = self.action.clone();
        let pending = self.pending.clone();
        let id = self.scheduler.set_timeout(
            self.delay_ms,
            Box::new(move || {
                pending.set(None);
                action();
            }),
        );
        self.pending.set(Some(id));
    }
}

/// Frame throttle in front of a debounce: a burst of events restarts the
/// quiet period at most once per frame, and `action` runs once it ends.
pub struct FrameDebounce {
    throttle: FrameThrottle,
    debounce: Rc<Debounce>,
}

impl FrameDebounce {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            throttle: FrameThrottle::new(scheduler.clone()),
            debounce: Rc::new(Debounce::new(scheduler, delay_ms, action)),
        }
    }

    pub fn call(&self) {
        let debounce = self.debounce.clone();
        self.throttle.call(move || debounce.call());
    }
}
