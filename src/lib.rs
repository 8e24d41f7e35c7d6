// ABOUTME: Library root for stagehand - staging and activation orchestration.
// ABOUTME: The platform API and the terminal are injected through the platform and output traits.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod job;
pub mod logging;
pub mod output;
pub mod platform;
pub mod stage;
pub mod types;
