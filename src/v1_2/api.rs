/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! The two wire mechanisms the legacy API speaks: form-encoded POST for
//! every method call, and raw-byte PUT with `X-Smug-*` headers for image
//! upload.

use crate::v1_2::errors::SmugMugError;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use strum_macros::{EnumString, IntoStaticStr};

// Root legacy API endpoints
pub const API_ORIGIN: &str = "https://api.smugmug.com";
pub const UPLOAD_ORIGIN: &str = "https://upload.smugmug.com";

// Fixed client identification sent with every request
const USER_AGENT: &str = concat!("smugmug-legacy-rs/", env!("CARGO_PKG_VERSION"));

// Values the upload transport forces regardless of caller input
pub(crate) const RESPONSE_TYPE: &str = "JSON";
pub(crate) const VERSION_HEADER: &str = "X-Smug-Version";
pub(crate) const RESPONSE_TYPE_HEADER: &str = "X-Smug-ResponseType";
pub(crate) const ALBUM_ID_HEADER: &str = "X-Smug-AlbumID";
pub(crate) const IMAGE_ID_HEADER: &str = "X-Smug-ImageID";
pub(crate) const FILE_NAME_HEADER: &str = "X-Smug-FileName";

/// The legacy API versions this library speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum ApiVersion {
    #[default]
    #[strum(to_string = "1.2.0")]
    V1_2_0,
    #[strum(to_string = "1.2.1")]
    V1_2_1,
}

/// Transport configuration.
///
/// Timeouts default to whatever the underlying HTTP client uses; set them
/// here rather than relying on those defaults when predictability matters.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_origin: String,
    pub upload_origin: String,
    pub version: ApiVersion,
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_origin: API_ORIGIN.to_string(),
            upload_origin: UPLOAD_ORIGIN.to_string(),
            version: ApiVersion::default(),
            user_agent: USER_AGENT.to_string(),
            connect_timeout: None,
            timeout: None,
        }
    }
}

/// Directly communicates with the API.
///
/// Holds the pooled HTTP client; safe to share across tasks. Each call is
/// one synchronous round trip and its connection is returned to the pool on
/// every exit path.
#[derive(Default, Clone)]
pub struct ApiClient {
    config: Config,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client honoring the config's timeouts.
    pub fn new(config: Config) -> Result<Self, SmugMugError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = config.connect_timeout {
            builder = builder.connect_timeout(t);
        }
        if let Some(t) = config.timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            https_client: builder.build()?,
            config,
        })
    }

    pub(crate) fn with_https_client(config: Config, https_client: reqwest::Client) -> Self {
        Self {
            config,
            https_client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The method endpoint for the configured origin and API version,
    /// e.g. `https://api.smugmug.com/services/api/json/1.2.0/`.
    pub fn method_endpoint(&self) -> Result<url::Url, SmugMugError> {
        let version: &'static str = self.config.version.into();
        let url = url::Url::parse(&self.config.api_origin)?
            .join(&format!("/services/api/json/{}/", version))?;
        Ok(url)
    }

    /// Issues one form-encoded POST for a method invocation.
    ///
    /// The form always starts with `method`; argument *i* pairs with value
    /// *i*, a pair is sent only when both name and value are non-empty, and
    /// trailing unmatched names are dropped. More values than names is a
    /// caller error.
    pub async fn post_form(
        &self,
        endpoint: &str,
        method_name: &str,
        arg_names: &[&str],
        values: &[Option<String>],
    ) -> Result<String, SmugMugError> {
        if endpoint.is_empty() {
            return Err(SmugMugError::InvalidRequest("endpoint is empty".into()));
        }
        if method_name.is_empty() {
            return Err(SmugMugError::InvalidRequest("method name is empty".into()));
        }
        if arg_names.len() < values.len() {
            return Err(SmugMugError::InvalidRequest(format!(
                "{} values supplied for {} declared arguments",
                values.len(),
                arg_names.len()
            )));
        }

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(values.len() + 1);
        form.push(("method", method_name));
        for (&name, value) in arg_names.iter().zip(values.iter()) {
            if let Some(value) = value {
                if !name.is_empty() && !value.is_empty() {
                    form.push((name, value.as_str()));
                }
            }
        }
        debug!("POST {} method={}", endpoint, method_name);

        let resp = self
            .https_client
            .post(endpoint)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .form(&form)
            .send()
            .await?;
        Self::read_body(resp).await
    }

    /// Issues one raw-byte PUT for an image upload.
    ///
    /// `values` maps positionally onto `header_names` (same pairing rule as
    /// [`Self::post_form`], but the lengths must match exactly). The target
    /// URL is `endpoint` plus the URL-encoded file name taken from the
    /// file-name header. The response-format and protocol-version headers
    /// are forced to the library's supported values; `Content-MD5` is
    /// computed from the body.
    pub async fn put_binary(
        &self,
        endpoint: &str,
        header_names: &[&str],
        values: &[Option<String>],
        body: Bytes,
    ) -> Result<String, SmugMugError> {
        if endpoint.is_empty() {
            return Err(SmugMugError::InvalidRequest("endpoint is empty".into()));
        }
        if header_names.len() != values.len() {
            return Err(SmugMugError::InvalidRequest(format!(
                "{} values supplied for {} declared headers",
                values.len(),
                header_names.len()
            )));
        }

        let populated = |header: &str| {
            header_names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(header))
                .and_then(|i| values[i].as_deref())
                .filter(|v| !v.is_empty())
        };
        // Album target means create-new, image target means replace-existing;
        // the service rejects both, so fail before any network I/O.
        if populated(ALBUM_ID_HEADER).is_some() && populated(IMAGE_ID_HEADER).is_some() {
            return Err(SmugMugError::InvalidRequest(
                "album target and image-replacement target are mutually exclusive".into(),
            ));
        }
        let file_name = populated(FILE_NAME_HEADER)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| SmugMugError::InvalidRequest("file name is empty".into()))?;

        let version: &'static str = self.config.version.into();
        let mut headers = HeaderMap::new();
        for (&name, value) in header_names.iter().zip(values.iter()) {
            // Forced headers are added below regardless of the caller's
            // list; a differing caller value only earns a warning here.
            let forced = if name.eq_ignore_ascii_case(RESPONSE_TYPE_HEADER) {
                Some(RESPONSE_TYPE)
            } else if name.eq_ignore_ascii_case(VERSION_HEADER) {
                Some(version)
            } else {
                None
            };
            if let Some(forced) = forced {
                if value.as_deref().is_some_and(|v| !v.is_empty() && v != forced) {
                    warn!(
                        "overriding caller-supplied {} {:?} with {:?}",
                        name, value, forced
                    );
                }
                continue;
            }
            let Some(value) = value.as_deref() else {
                continue;
            };
            if name.is_empty() || value.is_empty() {
                continue;
            }
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SmugMugError::InvalidRequest(format!("bad header name: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SmugMugError::InvalidRequest(format!("bad header value: {e}")))?;
            headers.insert(name, value);
        }
        headers.insert(
            HeaderName::from_static("x-smug-responsetype"),
            HeaderValue::from_static(RESPONSE_TYPE),
        );
        headers.insert(
            HeaderName::from_static("x-smug-version"),
            HeaderValue::from_str(version)
                .map_err(|e| SmugMugError::InvalidRequest(format!("bad header value: {e}")))?,
        );

        let md5_sum = format!("{:x}", md5::compute(&body));
        headers.insert(
            HeaderName::from_static("content-md5"),
            HeaderValue::from_str(&md5_sum)
                .map_err(|e| SmugMugError::InvalidRequest(format!("bad header value: {e}")))?,
        );

        let req_url = url::Url::parse(&format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            urlencoding::encode(file_name)
        ))?;
        debug!("PUT {} ({} bytes)", req_url, body.len());

        let resp = self
            .https_client
            .put(req_url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        Self::read_body(resp).await
    }

    // Validates the status and reads the body with the server-declared
    // charset. A 200 with an unreadable body is a transport failure.
    async fn read_body(resp: reqwest::Response) -> Result<String, SmugMugError> {
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(SmugMugError::UnexpectedHttpStatus(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish()
    }
}
