/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_2::album::Album;
use crate::v1_2::json::{self, JsonObject};
use chrono::NaiveDateTime;
use serde_json::Value;

/// Holds information returned for an image.
///
/// Like [`Album`], every field is optional; the display URLs only appear in
/// heavy replies or from `images.getURLs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub id: Option<u64>,
    pub key: Option<String>,
    pub caption: Option<String>,
    pub file_name: Option<String>,
    pub format: Option<String>,
    pub size: Option<u64>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub position: Option<u64>,
    pub md5_sum: Option<String>,
    pub is_hidden: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<i64>,
    pub last_updated: Option<NaiveDateTime>,
    pub thumb_url: Option<String>,
    pub small_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
    /// Back-reference to the containing album, when the reply nests one.
    pub album: Option<Box<Album>>,
}

impl Image {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            key: json::string_field(obj, "Key"),
            caption: json::string_field(obj, "Caption"),
            file_name: json::string_field(obj, "FileName"),
            format: json::string_field(obj, "Format"),
            size: json::u64_field(obj, "Size"),
            width: json::u64_field(obj, "Width"),
            height: json::u64_field(obj, "Height"),
            position: json::u64_field(obj, "Position"),
            md5_sum: json::string_field(obj, "MD5Sum"),
            is_hidden: json::bool_field(obj, "Hidden"),
            latitude: json::f64_field(obj, "Latitude"),
            longitude: json::f64_field(obj, "Longitude"),
            altitude: json::i64_field(obj, "Altitude"),
            last_updated: json::date_time_field(obj, "LastUpdated"),
            thumb_url: json::string_field(obj, "ThumbURL"),
            small_url: json::string_field(obj, "SmallURL"),
            medium_url: json::string_field(obj, "MediumURL"),
            large_url: json::string_field(obj, "LargeURL"),
            original_url: json::string_field(obj, "OriginalURL"),
            album: json::object_field(obj, "Album").map(|o| Box::new(Album::from_json(o))),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_string(&mut obj, "Key", &self.key);
        json::put_string(&mut obj, "Caption", &self.caption);
        json::put_string(&mut obj, "FileName", &self.file_name);
        json::put_string(&mut obj, "Format", &self.format);
        json::put_u64(&mut obj, "Size", self.size);
        json::put_u64(&mut obj, "Width", self.width);
        json::put_u64(&mut obj, "Height", self.height);
        json::put_u64(&mut obj, "Position", self.position);
        json::put_string(&mut obj, "MD5Sum", &self.md5_sum);
        json::put_bool(&mut obj, "Hidden", self.is_hidden);
        json::put_f64(&mut obj, "Latitude", self.latitude);
        json::put_f64(&mut obj, "Longitude", self.longitude);
        json::put_i64(&mut obj, "Altitude", self.altitude);
        json::put_date_time(&mut obj, "LastUpdated", self.last_updated);
        json::put_string(&mut obj, "ThumbURL", &self.thumb_url);
        json::put_string(&mut obj, "SmallURL", &self.small_url);
        json::put_string(&mut obj, "MediumURL", &self.medium_url);
        json::put_string(&mut obj, "LargeURL", &self.large_url);
        json::put_string(&mut obj, "OriginalURL", &self.original_url);
        if let Some(album) = &self.album {
            obj.insert("Album".to_string(), album.to_json());
        }
        Value::Object(obj)
    }
}
