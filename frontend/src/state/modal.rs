//! Project modal lifecycle and the page scroll lock it owns.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use leptos::*;

use crate::utils::dom;

/// Anything that can stop the page body from scrolling.
pub trait ScrollLock {
    fn set_locked(&self, locked: bool);
}

/// Locks the real page by toggling `overflow` on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn set_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "unset" };
        if let Err(err) = dom::set_body_overflow(overflow) {
            log::debug!("Body scroll lock not applied: {}", err);
        }
    }
}

#[derive(Clone)]
pub struct ScrollLockHandle(Rc<dyn ScrollLock>);

impl ScrollLockHandle {
    pub fn new(lock: impl ScrollLock + 'static) -> Self {
        Self(Rc::new(lock))
    }

    pub fn body() -> Self {
        Self::new(BodyScrollLock)
    }

    pub fn set_locked(&self, locked: bool) {
        self.0.set_locked(locked);
    }
}

/// Scroll lock provided by an ancestor, or the body lock.
pub fn use_scroll_lock() -> ScrollLockHandle {
    use_context::<ScrollLockHandle>().unwrap_or_else(ScrollLockHandle::body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Select,
    Dismiss,
    EnterFinished,
    ExitFinished,
}

impl ModalPhase {
    pub const ENTER: Duration = Duration::from_millis(0);
    pub const EXIT: Duration = Duration::from_millis(200);

    pub fn on(self, event: ModalEvent) -> Self {
        use ModalEvent::*;
        use ModalPhase::*;
        match (self, event) {
            (Closed | Closing, Select) => Opening,
            (Opening, EnterFinished) => Open,
            (Opening | Open, Dismiss) => Closing,
            (Closing, ExitFinished) => Closed,
            (phase, _) => phase,
        }
    }

    /// Whether the dialog is in the document (including its exit transition).
    pub fn is_visible(self) -> bool {
        !matches!(self, ModalPhase::Closed)
    }

    pub fn locks_scroll(self) -> bool {
        matches!(self, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Phase that ends on a timer, with the timer's length.
    pub fn settle_after(self) -> Option<Duration> {
        match self {
            ModalPhase::Opening => Some(Self::ENTER),
            ModalPhase::Closing => Some(Self::EXIT),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalPhase::Closed => "closed",
            ModalPhase::Opening => "opening",
            ModalPhase::Open => "open",
            ModalPhase::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Overlay,
    CloseButton,
    SelectionCleared,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CloseReason::Overlay => "overlay click",
            CloseReason::CloseButton => "close button",
            CloseReason::SelectionCleared => "selection cleared",
        })
    }
}

/// Drives [`ModalPhase`] and keeps the scroll lock in step with it. The lock
/// is re-applied after every event and released when the controller drops.
pub struct ModalController {
    phase: ModalPhase,
    generation: u64,
    lock: ScrollLockHandle,
}

impl ModalController {
    pub fn new(lock: ScrollLockHandle, open: bool) -> Self {
        let mut controller = Self {
            phase: ModalPhase::Closed,
            generation: 0,
            lock,
        };
        if open {
            controller.apply(ModalEvent::Select);
        }
        controller
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Bumped on every phase change. Settle timers carry the value they were
    /// armed under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Follows the parent's selection.
    pub fn sync_selection(&mut self, selected: bool) -> ModalPhase {
        if selected {
            self.apply(ModalEvent::Select)
        } else {
            self.close(CloseReason::SelectionCleared)
        }
    }

    pub fn close(&mut self, reason: CloseReason) -> ModalPhase {
        if self.phase.locks_scroll() {
            log::debug!("Closing project modal: {}", reason);
        }
        self.apply(ModalEvent::Dismiss)
    }

    /// Ends the timed phase `expected` entered at `generation`. A timer armed
    /// for an earlier phase, even one with the same name, is ignored.
    pub fn finish_transition(&mut self, expected: ModalPhase, generation: u64) -> ModalPhase {
        if self.phase != expected || self.generation != generation {
            return self.phase;
        }
        match expected {
            ModalPhase::Opening => self.apply(ModalEvent::EnterFinished),
            ModalPhase::Closing => self.apply(ModalEvent::ExitFinished),
            phase => phase,
        }
    }

    fn apply(&mut self, event: ModalEvent) -> ModalPhase {
        let next = self.phase.on(event);
        if next != self.phase {
            self.phase = next;
            self.generation += 1;
        }
        self.lock.set_locked(self.phase.locks_scroll());
        self.phase
    }
}

impl Drop for ModalController {
    fn drop(&mut self) {
        self.lock.set_locked(false);
    }
}
