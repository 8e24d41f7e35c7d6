// ABOUTME: Error types reported by the platform API layer.
// ABOUTME: Messages are surfaced to the user verbatim, so Display carries no extra prefix.

/// Errors from platform calls and build processes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// Transport or API failure, message as returned by the API client.
    #[error("{0}")]
    Api(String),

    /// The build process reported a failure.
    #[error("{0}")]
    Staging(String),

    #[error("App '{name}' not found")]
    ApplicationNotFound { name: String },

    #[error("Start app timeout: {name}")]
    StartupTimeout { name: String },

    #[error("All instances of the app crashed")]
    AllInstancesCrashed,
}
