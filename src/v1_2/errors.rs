/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned.
///
/// A `stat=fail` reply from the service is *not* represented here; it is
/// normal call data surfaced through [`crate::v1_2::ResponseEnvelope`].
#[derive(Error, Debug)]
pub enum SmugMugError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedHttpStatus(u16),

    #[error("API response is malformed")]
    ResponseMalformed(#[from] serde_json::Error),

    #[error("Expected response field missing: {0}")]
    PayloadMissing(&'static str),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}
