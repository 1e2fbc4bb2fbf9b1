//! Event publication for the story.
//!
//! Callers subscribe through [`EventController`] to learn about step entries,
//! status announcements and resizes. Each [`StoryEvent`] carries a set of
//! [`EventKind`] flags so one occurrence can match several categories (a
//! step entry that starts a transition is both `STEP_ENTER` and
//! `TRANSITION`).
//!
//! A subscriber passes an [`EventFilter`]; an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::scroll::Direction;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A step section crossed the trigger line.
    pub const STEP_ENTER: Self = Self(1 << 0);
    /// The status region text was (re)set.
    pub const STATUS: Self = Self(1 << 1);
    /// The chart was resized.
    pub const RESIZE: Self = Self(1 << 2);
    /// An animated point transition was started.
    pub const TRANSITION: Self = Self(1 << 3);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::STEP_ENTER, "STEP_ENTER"),
            (EventKind::STATUS, "STATUS"),
            (EventKind::RESIZE, "RESIZE"),
            (EventKind::TRANSITION, "TRANSITION"),
        ];
        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for step-entry events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMeta {
    pub index: usize,
    pub direction: Direction,
}

/// Metadata for resize events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeMeta {
    /// Measured container width.
    pub container_width: f64,
    /// Resulting inner plot side length.
    pub side: f64,
}

/// Event emitted by the story controller.
#[derive(Debug, Clone)]
pub struct StoryEvent {
    pub kinds: EventKind,
    /// Story time in seconds, as passed to the controller.
    pub timestamp: f64,
    pub step: Option<StepMeta>,
    /// Status sentence, set for `STATUS` events.
    pub status: Option<String>,
    pub resize: Option<ResizeMeta>,
}

impl StoryEvent {
    pub fn new(kinds: EventKind, timestamp: f64) -> Self {
        Self {
            kinds,
            timestamp,
            step: None,
            status: None,
            resize: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR-mask selecting which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &StoryEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<StoryEvent>,
}

/// Collects subscribers and fans events out to them over `mpsc` channels.
#[derive(Clone, Default)]
pub struct EventController {
    inner: Arc<Mutex<Vec<Subscriber>>>,
}

impl EventController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<StoryEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut subs) = self.inner.lock() {
            subs.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<StoryEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to every matching subscriber.
    ///
    /// Subscribers whose receiver was dropped are pruned when a send fails.
    pub fn emit(&self, event: StoryEvent) {
        if let Ok(mut subs) = self.inner.lock() {
            subs.retain(|sub| {
                if sub.filter.matches(&event) {
                    sub.sender.send(event.clone()).is_ok()
                } else {
                    true
                }
            });
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|s| s.len()).unwrap_or(0)
    }
}
