use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;
use crate::telemetry::{log_event, LogLevel};

pub const CURSOR_HIDE_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStep {
    Typed { ch: char },
    Finished,
    Idle,
}

/// Reveals a fixed string one character per tick.
#[derive(Clone, Debug)]
pub struct TypingAnimation {
    chars: Vec<char>,
    speed_ms: u32,
    index: usize,
    is_typing: bool,
}

impl TypingAnimation {
    pub fn new(text: &str, speed_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            speed_ms,
            index: 0,
            is_typing: true,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    #[cfg(test)]
    pub fn typed_prefix(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    pub fn tick(&mut self) -> TypingStep {
        if !self.is_typing {
            return TypingStep::Idle;
        }

        match self.chars.get(self.index) {
            Some(&ch) => {
                self.index += 1;
                TypingStep::Typed { ch }
            }
            None => {
                self.is_typing = false;
                TypingStep::Finished
            }
        }
    }
}

pub trait TextTarget {
    fn append_char(&self, ch: char);
    /// Hides the blinking cursor; a page without one ignores this.
    fn hide_cursor(&self);
}

/// Types the first character immediately, then one per `speed_ms`, and hides the
/// cursor `CURSOR_HIDE_DELAY_MS` after the last tick.
pub fn start(animation: TypingAnimation, target: Rc<dyn TextTarget>, scheduler: Rc<dyn Scheduler>) {
    step(Rc::new(RefCell::new(animation)), target, scheduler);
}

fn step(
    animation: Rc<RefCell<TypingAnimation>>,
    target: Rc<dyn TextTarget>,
    scheduler: Rc<dyn Scheduler>,
) {
    let next = animation.borrow_mut().tick();

    match next {
        TypingStep::Typed { ch } => {
            target.append_char(ch);
            let speed_ms = animation.borrow().speed_ms();
            let rescheduler = scheduler.clone();
            scheduler.set_timeout(
                speed_ms,
                Box::new(move || step(animation, target, rescheduler)),
            );
        }
        TypingStep::Finished => {
            log_event(
                LogLevel::Debug,
                "typing.finished",
                json!({ "chars": animation.borrow().index() }),
            );
            scheduler.set_timeout(CURSOR_HIDE_DELAY_MS, Box::new(move || target.hide_cursor()));
        }
        TypingStep::Idle => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    struct RecordingTarget {
        clock: Rc<ManualScheduler>,
        text: RefCell<String>,
        updates: RefCell<Vec<(u64, String)>>,
        cursor_hidden_at: RefCell<Option<u64>>,
    }

    impl RecordingTarget {
        fn new(clock: Rc<ManualScheduler>) -> Rc<Self> {
            Rc::new(Self {
                clock,
                text: RefCell::new(String::new()),
                updates: RefCell::new(Vec::new()),
                cursor_hidden_at: RefCell::new(None),
            })
        }
    }

    impl TextTarget for RecordingTarget {
        fn append_char(&self, ch: char) {
            self.text.borrow_mut().push(ch);
            self.updates
                .borrow_mut()
                .push((self.clock.now_ms(), self.text.borrow().clone()));
        }

        fn hide_cursor(&self) {
            *self.cursor_hidden_at.borrow_mut() = Some(self.clock.now_ms());
        }
    }

    #[test]
    fn tick_walks_every_character_then_finishes_once() {
        let mut animation = TypingAnimation::new("héllo", 50);

        let typed: Vec<char> = std::iter::from_fn(|| match animation.tick() {
            TypingStep::Typed { ch } => Some(ch),
            _ => None,
        })
        .collect();

        assert_eq!(typed, vec!['h', 'é', 'l', 'l', 'o']);
        assert!(!animation.is_typing());
        assert_eq!(animation.tick(), TypingStep::Idle);
        assert_eq!(animation.typed_prefix(), "héllo");
    }

    #[test]
    fn updates_are_successive_prefixes_spaced_by_speed() {
        let clock = Rc::new(ManualScheduler::new());
        let target = RecordingTarget::new(clock.clone());
        let text = "Rust";

        start(TypingAnimation::new(text, 100), target.clone(), clock.clone());
        clock.advance(10_000);

        let updates = target.updates.borrow();
        assert_eq!(updates.len(), text.chars().count());
        for (index, (_, prefix)) in updates.iter().enumerate() {
            assert_eq!(prefix, &text[..=index]);
        }
        for pair in updates.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 100);
        }
        assert_eq!(updates[0].0, 0);
    }

    #[test]
    fn cursor_hides_one_second_after_the_final_tick() {
        let clock = Rc::new(ManualScheduler::new());
        let target = RecordingTarget::new(clock.clone());

        start(TypingAnimation::new("ab", 100), target.clone(), clock.clone());
        clock.advance(1_199);
        assert_eq!(*target.cursor_hidden_at.borrow(), None);

        clock.advance(1);
        // 'a' at 0, 'b' at 100, finish tick at 200, hide at 1200.
        assert_eq!(*target.cursor_hidden_at.borrow(), Some(1_200));
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn empty_text_only_hides_the_cursor() {
        let clock = Rc::new(ManualScheduler::new());
        let target = RecordingTarget::new(clock.clone());

        start(TypingAnimation::new("", 100), target.clone(), clock.clone());
        clock.advance(1_000);

        assert!(target.updates.borrow().is_empty());
        assert_eq!(*target.cursor_hidden_at.borrow(), Some(1_000));
    }
}
