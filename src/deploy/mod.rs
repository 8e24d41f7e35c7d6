// ABOUTME: Staging a package and activating the resulting build.
// ABOUTME: Exports AppStager, the strategy and action types, and StageError.

mod action;
mod error;
mod stager;
mod strategy;

pub use action::{AppAction, StartTarget};
pub use error::{StageError, StageErrorKind};
pub use stager::AppStager;
pub use strategy::DeployStrategy;
