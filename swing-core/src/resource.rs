use std::sync::Arc;

use crate::PagingError;

/// The cause attached to a [`Resource::Error`].
pub type ErrorCause = Arc<dyn std::error::Error + Send + Sync>;

/// The lifecycle of one asynchronous fetch.
///
/// A logical request moves through zero or more `Loading` states and ends in
/// exactly one terminal `Success` or `Error`. A `Loading` seen after a terminal
/// state belongs to a new request.
#[derive(Debug, Clone, Default)]
pub enum Resource<T> {
    #[default]
    Loading,
    Success(T),
    Error {
        message: String,
        cause: Option<ErrorCause>,
    },
}
impl<T> Resource<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error {
            message: message.into(),
            cause: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error { message, cause } => Resource::Error { message, cause },
        }
    }
}
impl<T> From<PagingError> for Resource<T> {
    fn from(error: PagingError) -> Self {
        Resource::Error {
            message: error.message.clone(),
            cause: Some(Arc::new(error)),
        }
    }
}
impl<T> From<Result<T, PagingError>> for Resource<T> {
    fn from(result: Result<T, PagingError>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Subject, sa};

    #[test]
    fn test_accessors() {
        let loading: Resource<u32> = Resource::default();
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
        assert_eq!(loading.data(), None);

        let success = Resource::Success(3);
        assert!(success.is_terminal());
        assert_eq!(success.data(), Some(&3));
        assert_eq!(success.map(|v| v * 2).data(), Some(&6));

        let error: Resource<u32> = Resource::error("nope");
        assert!(error.is_terminal());
        assert_eq!(error.error_message(), Some("nope"));
    }

    #[test]
    fn test_from_paging_error_keeps_message_and_cause() {
        let error = PagingError::classify(
            Subject::Albums,
            sa::ClientError::StatusError {
                code: 404,
                message: None,
            },
        );
        let resource: Resource<()> = Err(error).into();
        match resource {
            Resource::Error { message, cause } => {
                assert_eq!(message, "Albums not found.");
                let cause = cause.unwrap();
                let paging = cause.downcast_ref::<PagingError>().unwrap();
                assert_eq!(paging.kind, ErrorKind::NotFound);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }
}
