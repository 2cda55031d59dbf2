use std::sync::Arc;

use crate::sa;

/// What a failed remote call was trying to load. Used to phrase messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Albums,
    Artists,
    Tracks,
    Album,
}
impl Subject {
    fn noun(&self) -> &'static str {
        match self {
            Subject::Albums => "albums",
            Subject::Artists => "artists",
            Subject::Tracks => "tracks",
            Subject::Album => "album",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Subject::Albums => "Albums",
            Subject::Artists => "Artists",
            Subject::Tracks => "Tracks",
            Subject::Album => "Album",
        }
    }
}

/// The classification of a failed remote load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkUnavailable,
    NotFound,
    Unauthorized,
    Forbidden,
    ServerError,
    Unknown,
}

/// A classified failure of a page load (or any other remote load), with a
/// message fit for display and the underlying client error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct PagingError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub cause: Arc<sa::ClientError>,
}
impl PagingError {
    pub fn classify(subject: Subject, cause: sa::ClientError) -> Self {
        let noun = subject.noun();
        let (kind, message) = if cause.is_connectivity() {
            (
                ErrorKind::NetworkUnavailable,
                "Network connection failed. Please check your internet connection.".to_string(),
            )
        } else if let Some(code) = cause.status_code() {
            match code {
                404 => (ErrorKind::NotFound, format!("{} not found.", subject.title())),
                401 => (
                    ErrorKind::Unauthorized,
                    "Authentication failed. Please log in again.".to_string(),
                ),
                403 => (ErrorKind::Forbidden, format!("Access denied to {noun}.")),
                500..=599 => (
                    ErrorKind::ServerError,
                    "Server error. Please try again later.".to_string(),
                ),
                _ => (
                    ErrorKind::Unknown,
                    format!("Failed to load {noun}. Please try again."),
                ),
            }
        } else {
            (
                ErrorKind::Unknown,
                format!("An unexpected error occurred while loading {noun}."),
            )
        };

        Self {
            kind,
            message,
            cause: Arc::new(cause),
        }
    }
}
