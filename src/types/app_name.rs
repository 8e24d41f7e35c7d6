// ABOUTME: Application name validation.
// ABOUTME: Rejects names the platform would refuse before any API call is made.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

const MAX_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppNameError {
    #[error("application name cannot be empty")]
    Empty,

    #[error("application name exceeds maximum length of 255 characters")]
    TooLong,

    #[error("application name cannot start or end with whitespace")]
    SurroundingWhitespace,

    #[error("invalid character in application name: {0:?}")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(value: &str) -> Result<Self, AppNameError> {
        if value.is_empty() {
            return Err(AppNameError::Empty);
        }

        if value.chars().count() > MAX_LEN {
            return Err(AppNameError::TooLong);
        }

        if value.trim() != value {
            return Err(AppNameError::SurroundingWhitespace);
        }

        if let Some(c) = value.chars().find(|c| c.is_control()) {
            return Err(AppNameError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AppName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AppName::new(&raw).map_err(serde::de::Error::custom)
    }
}
