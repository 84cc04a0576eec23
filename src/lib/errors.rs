use std::fmt;

/// Failures on the network path between the widget and its endpoints.
///
/// Incomplete input is not represented here; it never reaches the network
/// layer and is reported as a typed result by the entry model instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The transport failed outright (DNS, refused connection, CORS).
    Network(String),
    /// The request was aborted after the timeout elapsed.
    Timeout(String),
    /// The server answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The request body could not be encoded or built.
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "timed out: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "server returned {status}: {message}")
            }
            AppError::Parse(message) => write!(formatter, "bad response: {message}"),
            AppError::Serialization(message) => write!(formatter, "bad request: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
