// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The redirect target could not be parsed as a URI.
    #[error("invalid redirect target `{target}`: {source}")]
    InvalidRedirect {
        target: String,
        source: http::uri::InvalidUri,
    },
    /// A header value assembled by the response pipeline was rejected.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
    /// The json payload could not be serialized.
    #[error("failed to encode json body: {0}")]
    Json(#[from] serde_json::Error),
    /// A json response was finalized without any payload being set.
    #[error("json response payload is not set")]
    MissingPayload,
    /// The session backend failed to persist its state.
    #[error("failed to persist session: {0}")]
    Session(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
