/// Errors returned by [`crate::HttpClient`].
///
/// Every variant is logged by the client before it is handed back to the
/// caller. Recovery (retrying, surfacing a notification) is up to the caller.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The base URL or the request URL could not be parsed or resolved.
    #[error("failed to parse URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A header name or value is not valid in an HTTP request.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    /// The request could not be sent or the response body could not be read.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The response body is not valid JSON.
    #[error("failed to parse JSON response: {0}")]
    Parse(#[source] serde_json::Error),
    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize JSON payload: {0}")]
    Serialize(#[source] serde_json::Error),
}
