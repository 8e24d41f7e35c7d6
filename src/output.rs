// ABOUTME: UI sink for staging and deployment feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use crate::config::Config;
use crate::diagnostics::Warnings;
use crate::platform::{AppSummary, LogMessage};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    #[default]
    Normal,
    /// Minimal output for CI (warnings, errors and the summary only)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Everything the orchestration layer can show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Text(String),
    Newline,
    Warning(String),
    Log(LogMessage),
    InstanceDetails(String),
    /// One tick of a progress indicator.
    Progress,
    Summary(AppSummary),
}

/// Destination for user-visible events.
///
/// Driven from a single consuming task; implementations only need to keep
/// each event intact, not order events across tasks.
pub trait Ui: Send + Sync {
    fn emit(&self, event: UiEvent);

    fn text(&self, message: &str) {
        self.emit(UiEvent::Text(message.to_string()));
    }

    fn newline(&self) {
        self.emit(UiEvent::Newline);
    }

    fn warning(&self, message: &str) {
        self.emit(UiEvent::Warning(message.to_string()));
    }

    /// Show a batch of warnings in the order they were returned.
    fn warnings(&self, warnings: &Warnings) {
        for warning in warnings.iter() {
            self.warning(warning);
        }
    }

    fn log_message(&self, message: &LogMessage) {
        self.emit(UiEvent::Log(message.clone()));
    }

    fn instance_details(&self, details: &str) {
        self.emit(UiEvent::InstanceDetails(details.to_string()));
    }

    fn progress(&self) {
        self.emit(UiEvent::Progress);
    }

    fn summary(&self, summary: &AppSummary) {
        self.emit(UiEvent::Summary(summary.clone()));
    }
}

/// Which standard stream a rendered line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Terminal UI writing to stdout/stderr according to its mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Output in the mode chosen by configuration.
    pub fn for_config(config: &Config) -> Self {
        Self::new(config.output)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Render an event to the text it prints, or `None` if the mode hides it.
    pub fn render(&self, event: &UiEvent) -> Option<(Stream, String)> {
        match self.mode {
            OutputMode::Normal => Some(render_text(event)),
            OutputMode::Quiet => match event {
                UiEvent::Warning(_) | UiEvent::Summary(_) => Some(render_text(event)),
                _ => None,
            },
            OutputMode::Json => render_json(event),
        }
    }
}

impl Ui for Output {
    fn emit(&self, event: UiEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, line)) if matches!(event, UiEvent::Progress) => {
                // Stdout is line-buffered; a tick has no newline to flush it.
                let mut stdout = std::io::stdout().lock();
                write!(stdout, "{line}").and_then(|()| stdout.flush()).ok();
            }
            Some((Stream::Stdout, line)) => println!("{line}"),
            Some((Stream::Stderr, line)) => eprintln!("{line}"),
            None => {}
        }
    }
}

fn render_text(event: &UiEvent) -> (Stream, String) {
    match event {
        UiEvent::Text(text) | UiEvent::InstanceDetails(text) => (Stream::Stdout, text.clone()),
        UiEvent::Newline => (Stream::Stdout, String::new()),
        UiEvent::Warning(warning) => (Stream::Stderr, warning.clone()),
        UiEvent::Log(message) => (
            Stream::Stdout,
            format!(
                "   {} [{}] {}",
                message.timestamp.format("%Y-%m-%dT%H:%M:%S%.2f%z"),
                message.source_instance,
                message.text
            ),
        ),
        UiEvent::Progress => (Stream::Stdout, ".".to_string()),
        UiEvent::Summary(summary) => (Stream::Stdout, render_summary(summary)),
    }
}

fn render_summary(summary: &AppSummary) -> String {
    let mut lines = vec![
        format!("name:              {}", summary.name),
        format!("requested state:   {}", summary.state),
        format!("routes:            {}", summary.routes.join(", ")),
    ];
    if let Some(stack) = &summary.stack {
        lines.push(format!("stack:             {stack}"));
    }
    if !summary.buildpacks.is_empty() {
        lines.push(format!("buildpacks:        {}", summary.buildpacks.join(", ")));
    }

    for process in &summary.processes {
        lines.push(String::new());
        lines.push(format!("type:           {}", process.process_type));
        lines.push(format!(
            "instances:      {}/{}",
            process.running_count(),
            process.instances.len()
        ));
        for instance in &process.instances {
            let since = instance
                .since
                .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
                .unwrap_or_default();
            lines.push(
                format!(
                    "#{:<3} {:<9} {:<21} {}M of {}M   {}",
                    instance.index,
                    instance.state,
                    since,
                    instance.memory_bytes / (1024 * 1024),
                    instance.memory_quota_bytes / (1024 * 1024),
                    instance.details
                )
                .trim_end()
                .to_string(),
            );
        }
    }

    lines.join("\n")
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Text { message: &'a str },
    Warning { message: &'a str },
    Log { message: &'a LogMessage },
    InstanceDetails { message: &'a str },
    Summary { summary: &'a AppSummary },
}

fn render_json(event: &UiEvent) -> Option<(Stream, String)> {
    let (stream, json) = match event {
        UiEvent::Newline | UiEvent::Progress => return None,
        UiEvent::Text(message) => (Stream::Stdout, JsonEvent::Text { message }),
        UiEvent::Warning(message) => (Stream::Stderr, JsonEvent::Warning { message }),
        UiEvent::Log(message) => (Stream::Stdout, JsonEvent::Log { message }),
        UiEvent::InstanceDetails(message) => {
            (Stream::Stdout, JsonEvent::InstanceDetails { message })
        }
        UiEvent::Summary(summary) => (Stream::Stdout, JsonEvent::Summary { summary }),
    };
    serde_json::to_string(&json).ok().map(|line| (stream, line))
}
