//! Narration capture for tests.
//!
//! [`NarrationCapture`] is a `tracing_subscriber` layer that records every
//! narration event (target [`NARRATION_TARGET`]) emitted while a closure runs
//! under [`NarrationCapture::run`]. Other log lines are ignored.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use unit_core::narration::NARRATION_TARGET;

/// One recorded narration event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedNarration {
    /// Event tag (`constructed`, `attacked`, ...).
    pub event: String,
    /// Variant label (`ClapTrap`, ...).
    pub kind: String,
    /// Unit name.
    pub unit: String,
    /// Human-readable line.
    pub message: String,
}

/// Layer recording narration events into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct NarrationCapture {
    records: Arc<Mutex<Vec<CapturedNarration>>>,
}

impl NarrationCapture {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with this capture installed as the thread's default subscriber.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedNarration> {
        self.records
            .lock()
            .expect("narration capture poisoned")
            .clone()
    }

    /// Event tags recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.event).collect()
    }

    /// `(event, kind)` pairs recorded so far, in order.
    #[must_use]
    pub fn events_by_kind(&self) -> Vec<(String, String)> {
        self.records()
            .into_iter()
            .map(|r| (r.event, r.kind))
            .collect()
    }

    /// Number of recorded events with tag `event`.
    #[must_use]
    pub fn count(&self, event: &str) -> usize {
        self.records().iter().filter(|r| r.event == event).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .expect("narration capture poisoned")
            .clear();
    }
}

impl<S: Subscriber> Layer<S> for NarrationCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != NARRATION_TARGET {
            return;
        }
        let mut record = CapturedNarration::default();
        event.record(&mut NarrationVisitor(&mut record));
        self.records
            .lock()
            .expect("narration capture poisoned")
            .push(record);
    }
}

struct NarrationVisitor<'a>(&'a mut CapturedNarration);

impl Visit for NarrationVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.0.event = value.to_string(),
            "kind" => self.0.kind = value.to_string(),
            "unit" => self.0.unit = value.to_string(),
            "message" => self.0.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_str(field, &format!("{value:?}"));
    }
}
