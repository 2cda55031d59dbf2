#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// An error that occurred when deserializing a response.
    DeserializationError(serde_json::Error),
    /// The server answered with a non-success HTTP status.
    StatusError {
        /// The HTTP status code.
        code: u16,
        /// The response body, if any.
        message: Option<String>,
    },
}
impl ClientError {
    /// The HTTP status code carried by this error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::StatusError { code, .. } => Some(*code),
            ClientError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error means the server could not be reached.
    pub fn is_connectivity(&self) -> bool {
        match self {
            ClientError::ReqwestError(e) => {
                e.status().is_none() && (e.is_connect() || e.is_timeout() || e.is_request())
            }
            _ => false,
        }
    }
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            ClientError::DeserializationError(e) => write!(f, "Deserialization error: {e}"),
            ClientError::StatusError { code, message } => {
                write!(f, "HTTP error: {code}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::ReqwestError(e) => Some(e),
            ClientError::DeserializationError(e) => Some(e),
            ClientError::StatusError { .. } => None,
        }
    }
}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DeserializationError(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the Swing Music API.
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) access_token: String,
    pub(crate) client: reqwest::Client,
}
impl Client {
    /// Create a new client.
    ///
    /// `access_token` is sent as a bearer token with every request.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The server this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_and_connectivity() {
        let not_found = ClientError::StatusError {
            code: 404,
            message: None,
        };
        assert_eq!(not_found.status_code(), Some(404));
        assert!(!not_found.is_connectivity());

        let malformed = ClientError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(malformed.status_code(), None);
        assert!(!malformed.is_connectivity());
    }

    /// A port that was just bound and released, so connecting to it is refused.
    fn closed_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_refused_connection_is_connectivity() {
        let client = Client::new(format!("http://127.0.0.1:{}", closed_port()), "token");
        let error = client
            .get::<serde_json::Value>("getall/albums", &[])
            .await
            .unwrap_err();
        assert!(matches!(error, ClientError::ReqwestError(_)));
        assert_eq!(error.status_code(), None);
        assert!(error.is_connectivity());
    }

    #[test]
    fn test_base_url_is_normalised() {
        let client = Client::new("http://localhost:1970/", "token");
        assert_eq!(client.base_url(), "http://localhost:1970");
    }

    #[test]
    fn test_display() {
        let error = ClientError::StatusError {
            code: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP error: 500: boom");
    }
}
