//! Log stream tests.
//!
//! Each test installs a scoped subscriber with a recording layer, runs one
//! operation, and checks which events it emitted at which level.

use serde_json::json;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use cline_test::models::Report;
use cline_test::{calculate_sum, get_user_info, hello_world, sum_integers};

/// Run `f` with an event recorder installed and return what it saw.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    let recorder = event_layer::EventRecorder::default();
    let events = recorder.events.clone();
    let subscriber = tracing_subscriber::registry().with(recorder);

    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    (result, captured)
}

#[test]
fn hello_world_logs_greeting_at_info() {
    let (_, events) = capture(hello_world);
    assert_eq!(
        events,
        vec![(
            Level::INFO,
            "Generated greeting: Hello from Python Cline Test!".to_string()
        )]
    );
}

#[test]
fn get_user_info_logs_retrieval_once() {
    let (result, events) = capture(|| get_user_info(123));
    assert!(result.is_ok());
    assert_eq!(
        events,
        vec![(Level::INFO, "Retrieved user info for ID 123".to_string())]
    );
}

#[test]
fn get_user_info_failure_logs_nothing() {
    let (result, events) = capture(|| get_user_info(0));
    assert!(result.is_err());
    assert!(events.is_empty(), "unexpected events: {events:?}");
}

#[test]
fn calculate_sum_logs_input_and_result_at_debug() {
    let (result, events) = capture(|| calculate_sum(&json!([1, 2, 3, 4, 5])));
    assert_eq!(result, Ok(15));
    assert_eq!(
        events,
        vec![(
            Level::DEBUG,
            "Calculated sum of [1, 2, 3, 4, 5]: 15".to_string()
        )]
    );
}

#[test]
fn calculate_sum_failure_logs_nothing() {
    let (result, events) = capture(|| calculate_sum(&json!([1, 2.5, 3])));
    assert!(result.is_err());
    assert!(events.is_empty(), "unexpected events: {events:?}");

    let (result, events) = capture(|| sum_integers(&[i64::MAX, 1]));
    assert!(result.is_err());
    assert!(events.is_empty(), "unexpected events: {events:?}");
}

#[test]
fn repeated_calls_log_once_per_call() {
    let (_, events) = capture(|| {
        hello_world();
        hello_world();
    });
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], events[1]);
}

#[test]
fn demo_logs_greeting_then_sum_then_user() {
    let (result, events) = capture(Report::demo);
    assert!(result.is_ok());
    assert_eq!(
        events,
        vec![
            (
                Level::INFO,
                "Generated greeting: Hello from Python Cline Test!".to_string()
            ),
            (
                Level::DEBUG,
                "Calculated sum of [1, 2, 3, 4, 5]: 15".to_string()
            ),
            (Level::INFO, "Retrieved user info for ID 123".to_string()),
        ]
    );
}

#[test]
fn sum_report_logs_once_and_failures_log_nothing() {
    let (result, events) = capture(|| Report::sum_of(&json!([0, 1, 2])));
    assert!(result.is_ok());
    assert_eq!(
        events,
        vec![(Level::DEBUG, "Calculated sum of [0, 1, 2]: 3".to_string())]
    );

    let (result, events) = capture(|| Report::sum_of(&json!([1, "2"])));
    assert!(result.is_err());
    assert!(events.is_empty(), "unexpected events: {events:?}");
}

/// A tracing layer that records every event's level and formatted message.
mod event_layer {
    use std::sync::{Arc, Mutex};

    use tracing::{Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;

    #[derive(Clone, Default)]
    pub struct EventRecorder {
        pub events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl<S: Subscriber> Layer<S> for EventRecorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct MsgVisitor(String);
            impl tracing::field::Visit for MsgVisitor {
                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.0 = format!("{value:?}");
                    }
                }
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.0 = value.to_string();
                    }
                }
            }

            let mut visitor = MsgVisitor(String::new());
            event.record(&mut visitor);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }
}
