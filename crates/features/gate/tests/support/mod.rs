#![allow(dead_code, unreachable_pub)]

use parking_lot::Mutex;
use relay_gate::{LineActivationRegistry, SessionStateProvider};
use relay_kernel::domain::line::Line;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Device state handed to the gate as its context.
#[derive(Debug, Clone, Copy, Default)]
pub struct Device {
    pub logged_in: bool,
    pub sim1: bool,
    pub sim2: bool,
}

/// Collaborator double that reads the device and counts every query.
#[derive(Debug, Default)]
pub struct CountingState {
    session_queries: AtomicUsize,
    line_queries: Mutex<Vec<Line>>,
}

impl CountingState {
    pub fn session_queries(&self) -> usize {
        self.session_queries.load(Ordering::SeqCst)
    }

    pub fn line_queries(&self) -> Vec<Line> {
        self.line_queries.lock().clone()
    }
}

impl SessionStateProvider<Device> for CountingState {
    fn is_logged_in(&self, device: &Device) -> bool {
        self.session_queries.fetch_add(1, Ordering::SeqCst);
        device.logged_in
    }
}

impl LineActivationRegistry<Device> for CountingState {
    fn active_status(&self, device: &Device, line: Line) -> bool {
        self.line_queries.lock().push(line);
        match line {
            Line::Sim1 => device.sim1,
            Line::Sim2 => device.sim2,
        }
    }
}

/// One captured `tracing` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub message_id: Option<String>,
}

/// Layer that keeps every event emitted while [`Capture::run`] is active.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    records: Arc<Mutex<Vec<Record>>>,
}

impl Capture {
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = Registry::default().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.records.lock().iter().filter(|record| record.level == level).count()
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        self.records.lock().push(Record {
            level: *event.metadata().level(),
            message: visitor.message,
            message_id: visitor.message_id,
        });
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    message_id: Option<String>,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => value.clone_into(&mut self.message),
            "message_id" => self.message_id = Some(value.to_owned()),
            _ => {},
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "message_id" => self.message_id = Some(format!("{value:?}")),
            _ => {},
        }
    }
}
