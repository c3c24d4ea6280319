//! Shared error types and utilities for the confwatch project.

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(String),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures while attaching the application to the host page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error("No global window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Mount point #{0} not found in the host page")]
    MissingMountPoint(String),
}

/// Failures while fetching a lazily loaded view chunk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Network error loading {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("View chunk {0} not found")]
    NotFound(String),
    #[error("Unexpected response status code {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Failed to read view chunk {url}: {reason}")]
    Decode { url: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Redirect target must be an absolute path, got {0:?}")]
    RedirectTarget(String),
}
