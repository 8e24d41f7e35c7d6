// ABOUTME: Warning batches that accompany every platform call.
// ABOUTME: Warned<T> pairs a call's result with the non-fatal warnings it produced.

use crate::platform::PlatformError;
use serde::Serialize;

/// Ordered warnings returned by a single platform call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning, auto-logging it via tracing.
    pub fn push(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        tracing::debug!(%warning, "platform warning");
        self.0.push(warning);
    }

    /// Append every warning of another batch, keeping its order.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Warnings {
    fn from(items: [S; N]) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Outcome of one platform call: its warnings plus its result.
///
/// Warnings are kept even when the call fails so callers can display them
/// before surfacing the error.
#[derive(Debug)]
#[must_use = "platform call outcomes carry warnings that must be displayed"]
pub struct Warned<T> {
    pub warnings: Warnings,
    pub result: Result<T, PlatformError>,
}

impl<T> Warned<T> {
    pub fn ok(value: T, warnings: impl Into<Warnings>) -> Self {
        Self {
            warnings: warnings.into(),
            result: Ok(value),
        }
    }

    pub fn err(error: PlatformError, warnings: impl Into<Warnings>) -> Self {
        Self {
            warnings: warnings.into(),
            result: Err(error),
        }
    }

    pub fn into_parts(self) -> (Warnings, Result<T, PlatformError>) {
        (self.warnings, self.result)
    }
}
