use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status code {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Could not encode request body: {0}")]
    Encode(String),
}

#[cfg(feature = "yew")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Request(other.to_string()),
        }
    }
}
