//! Tracing integration tests.
//!
//! Every generator emits exactly one `debug!` event per run, tagged with the
//! algorithm name, the input length, and the number of steps produced.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sortscope_sorters::{Algorithm, Options};
use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Test Infrastructure
// ============================================================================

type Fields = HashMap<String, String>;

/// A tracing layer that records the fields of every event.
struct EventCapture {
    events: Arc<Mutex<Vec<Fields>>>,
}

struct FieldVisitor<'a>(&'a mut Fields);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(fields);
    }
}

/// Runs `f` with a capturing subscriber and returns the recorded events.
fn capture(f: impl FnOnce()) -> Vec<Fields> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: events.clone(),
    });

    tracing::subscriber::with_default(subscriber, f);

    events.lock().unwrap().clone()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn one_event_per_run() {
    for algorithm in Algorithm::ALL {
        let mut steps = 0;
        let events = capture(|| {
            steps = algorithm.generate(&[4, 1, 3, 2], &Options::default()).len();
        });

        assert_eq!(events.len(), 1, "{algorithm}");
        let fields = &events[0];
        assert_eq!(fields["algorithm"], algorithm.name());
        assert_eq!(fields["len"], "4");
        assert_eq!(fields["steps"], steps.to_string());
    }
}

#[test]
fn bubble_reports_line_mode() {
    let events = capture(|| {
        let _ = Algorithm::Bubble.generate(&[2, 1], &Options::plain().with_source_lines());
    });

    assert_eq!(events[0]["lines"], "true");
}

#[test]
fn merge_reports_run_highlights() {
    let events = capture(|| {
        let _ = Algorithm::Merge.generate(&[2, 1], &Options::plain());
    });

    assert_eq!(events[0]["runs"], "false");
}
