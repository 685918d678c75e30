// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscogsError>;

/// Error type returned by the Discogs client.
#[derive(Debug, Error)]
pub enum DiscogsError {
    /// The configured user agent was missing or blank.
    #[error("invalid user agent")]
    UserAgentInvalid,

    /// The configured currency is not one Discogs accepts.
    #[error("currency not supported: {0}")]
    CurrencyNotSupported(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The user agent or token contains bytes that cannot be sent in a header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("invalid username")]
    InvalidUsername,

    /// Discogs rejected the credentials, or the endpoint requires a token.
    #[error("unauthorized")]
    Unauthorized,

    /// Discogs rate limit hit. The request is not retried.
    #[error("too many requests")]
    TooManyRequests,

    /// Any other non-success status.
    #[error("unknown error: {0}")]
    UnknownStatus(StatusCode),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Network or protocol failure from the HTTP transport.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
