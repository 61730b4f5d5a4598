/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! The universal reply wrapper and the typed payload layer on top of it.
//!
//! Every legacy API reply is one JSON object with a required `stat` field
//! ("ok"/"fail"), an optional echoed `method`, and `code`/`message` on
//! failure. [`ResponseEnvelope`] captures that shape; [`ApiResponse`] adds
//! the per-operation payload extracted from the same document.

use crate::v1_2::errors::SmugMugError;
use crate::v1_2::json::{self, JsonObject};
use num_enum::TryFromPrimitive;

/// Error codes the legacy API documents for `stat=fail` replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCode {
    InvalidLogin = 1,
    InvalidApiKey = 3,
    SystemError = 5,
    InvalidMethod = 6,
    InvalidUser = 15,
    InvalidAlbum = 18,
    InvalidSession = 30,
}

/// A service-reported failure: numeric code plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: u32,
    pub message: String,
}

impl ErrorDetail {
    /// Maps the numeric code onto a documented [`ApiErrorCode`], if known.
    pub fn kind(&self) -> Option<ApiErrorCode> {
        ApiErrorCode::try_from(self.code).ok()
    }
}

/// The status/error wrapper present in every reply, independent of the
/// specific operation.
///
/// An [`ErrorDetail`] is attached only when the reply carried *both* a
/// `code` and a `message`; one without the other is treated as no error.
/// That leniency matches the service's observed behavior and is carried
/// deliberately rather than tightened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    pub status: Option<String>,
    pub method: Option<String>,
    pub error: Option<ErrorDetail>,
}

impl ResponseEnvelope {
    /// Parses the envelope out of raw reply text.
    ///
    /// Blank text is legal and yields a fully-absent envelope; callers
    /// distinguish "nothing to parse" from "parsed with failure" by
    /// checking whether `status` is present. Non-blank text must be a JSON
    /// object carrying `stat`, or this fails.
    pub fn parse(text: &str) -> Result<Self, SmugMugError> {
        match parse_document(text)? {
            None => Ok(Self::default()),
            Some(doc) => Self::from_document(&doc),
        }
    }

    pub(crate) fn from_document(doc: &JsonObject) -> Result<Self, SmugMugError> {
        let status =
            json::string_field(doc, "stat").ok_or(SmugMugError::PayloadMissing("stat"))?;
        let code = json::u64_field(doc, "code").and_then(|c| u32::try_from(c).ok());
        let message = json::string_field(doc, "message");
        let error = match (code, message) {
            (Some(code), Some(message)) => Some(ErrorDetail { code, message }),
            _ => None,
        };
        Ok(Self {
            status: Some(status),
            method: json::string_field(doc, "method"),
            error,
        })
    }

    /// True when the reply carried a complete [`ErrorDetail`].
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One parsed invocation result: envelope plus, when the reply reported
/// success, the operation-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub envelope: ResponseEnvelope,
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Parses reply text, extracting the payload with `extract` only when
    /// the envelope is present and not an error. A success reply missing
    /// the payload key the extractor expects fails with `PayloadMissing`.
    pub fn parse_with(
        text: &str,
        extract: impl FnOnce(&JsonObject) -> Result<T, SmugMugError>,
    ) -> Result<Self, SmugMugError> {
        let doc = match parse_document(text)? {
            None => {
                return Ok(Self {
                    envelope: ResponseEnvelope::default(),
                    payload: None,
                });
            }
            Some(doc) => doc,
        };
        let envelope = ResponseEnvelope::from_document(&doc)?;
        if envelope.is_error() {
            return Ok(Self {
                envelope,
                payload: None,
            });
        }
        let payload = extract(&doc)?;
        Ok(Self {
            envelope,
            payload: Some(payload),
        })
    }

    pub fn is_error(&self) -> bool {
        self.envelope.is_error()
    }
}

// Blank text is a legal empty reply; anything else must parse as one JSON
// object.
fn parse_document(text: &str) -> Result<Option<JsonObject>, SmugMugError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(text)?;
    match value {
        serde_json::Value::Object(doc) => Ok(Some(doc)),
        _ => Err(SmugMugError::PayloadMissing("stat")),
    }
}

/// Payload extractors for [`ApiResponse::parse_with`].
///
/// Each operation in the catalog pairs with one of these: a single nested
/// object, an array of nested objects, a raw object for free-form payloads,
/// or nothing at all.
pub mod payload {
    use super::*;

    /// Extracts a single nested object under `key` and maps it through `f`.
    pub fn object<T>(
        key: &'static str,
        f: impl FnOnce(&JsonObject) -> T,
    ) -> impl FnOnce(&JsonObject) -> Result<T, SmugMugError> {
        move |doc| {
            let obj = json::object_field(doc, key).ok_or(SmugMugError::PayloadMissing(key))?;
            Ok(f(obj))
        }
    }

    /// Extracts an array of objects under `key`, mapping each through `f`.
    pub fn list<T>(
        key: &'static str,
        f: impl Fn(&JsonObject) -> T,
    ) -> impl FnOnce(&JsonObject) -> Result<Vec<T>, SmugMugError> {
        move |doc| {
            let items = json::array_field(doc, key).ok_or(SmugMugError::PayloadMissing(key))?;
            Ok(items
                .iter()
                .filter_map(serde_json::Value::as_object)
                .map(|obj| f(obj))
                .collect())
        }
    }

    /// Extracts the nested object under `key` verbatim, for payloads without
    /// a dedicated record type (e.g. EXIF data).
    pub fn raw_object(
        key: &'static str,
    ) -> impl FnOnce(&JsonObject) -> Result<JsonObject, SmugMugError> {
        move |doc| {
            json::object_field(doc, key)
                .cloned()
                .ok_or(SmugMugError::PayloadMissing(key))
        }
    }

    /// For operations whose success reply carries no payload.
    pub fn none() -> impl FnOnce(&JsonObject) -> Result<(), SmugMugError> {
        |_| Ok(())
    }
}
