/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Image upload metadata for the binary PUT transport.

use crate::v1_2::api::{ApiVersion, RESPONSE_TYPE};
use crate::v1_2::errors::SmugMugError;
use crate::v1_2::macros::args;
use bytes::Bytes;
use std::io::Read;

/// The ordered header-name set of the binary upload transport. Header *i*
/// pairs with value *i*, exactly like POST form arguments pair with a
/// method descriptor's argument names.
pub const UPLOAD_HEADERS: &[&str] = &[
    "X-Smug-SessionID",
    "X-Smug-Version",
    "X-Smug-ResponseType",
    "X-Smug-AlbumID",
    "X-Smug-ImageID",
    "X-Smug-FileName",
    "X-Smug-Caption",
    "X-Smug-Keywords",
    "X-Smug-Latitude",
    "X-Smug-Longitude",
    "X-Smug-Altitude",
    "X-Smug-Hidden",
];

/// Metadata for one image upload.
///
/// Exactly one of `album_id` (create a new image in that album) or
/// `image_id` (replace that existing image) may be set; the transport
/// rejects the call before any network I/O when both are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub album_id: Option<u64>,
    pub image_id: Option<u64>,
    pub caption: Option<String>,
    pub keywords: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<i64>,
    pub hidden: Option<bool>,
}

impl ImageUpload {
    /// Upload `file_name` as a new image into the given album.
    pub fn into_album(file_name: &str, album_id: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            album_id: Some(album_id),
            ..Self::default()
        }
    }

    /// Upload `file_name` as a replacement for the given existing image.
    pub fn replacing_image(file_name: &str, image_id: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            image_id: Some(image_id),
            ..Self::default()
        }
    }

    // Order must match UPLOAD_HEADERS.
    pub(crate) fn header_values(
        &self,
        session_id: &str,
        version: ApiVersion,
    ) -> Vec<Option<String>> {
        let version: &'static str = version.into();
        args![
            session_id,
            version,
            RESPONSE_TYPE,
            self.album_id,
            self.image_id,
            self.file_name,
            self.caption,
            self.keywords,
            self.latitude,
            self.longitude,
            self.altitude,
            self.hidden,
        ]
    }
}

// The checksum header and the request body need the same byte array, so a
// stream has to be fully drained before the transport runs.
pub(crate) fn drain_reader(reader: &mut dyn Read) -> Result<Bytes, SmugMugError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(Bytes::from(buf))
}

pub(crate) fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}
