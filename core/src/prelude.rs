/// Failure classes of a single API request.
///
/// Variants carry rendered messages rather than the source errors so that a
/// result can be cloned into UI messages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("malformed request url: {0}")]
    MalformedUrl(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("decode failure: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
