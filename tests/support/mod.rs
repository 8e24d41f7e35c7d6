// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording UI and a scripted in-memory platform.

#![allow(dead_code)]

pub mod fake_platform;

use parking_lot::Mutex;
use stagehand::output::{Ui, UiEvent};
use std::sync::Once;

pub use fake_platform::{BuildScript, Call, FakePlatform, LogScript};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("stagehand=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// UI that records every event for later assertions.
#[derive(Default)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().clone()
    }

    pub fn shown_warnings(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Warning(warning) => Some(warning.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Log(message) => Some(message.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, UiEvent::Summary(_)))
            .count()
    }

    /// Position of the first event matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&UiEvent) -> bool) -> Option<usize> {
        self.events.lock().iter().position(predicate)
    }
}

impl Ui for RecordingUi {
    fn emit(&self, event: UiEvent) {
        self.events.lock().push(event);
    }
}
