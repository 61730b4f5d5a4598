/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_2::json::{self, JsonObject};
use serde_json::Value;

/// Per-album transfer totals from `albums.getStats` and
/// `users.getTransferStats`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumTransferStats {
    pub id: Option<u64>,
    pub bytes: Option<u64>,
    pub hits: Option<u64>,
    pub small: Option<u64>,
    pub medium: Option<u64>,
    pub large: Option<u64>,
    pub original: Option<u64>,
    /// Per-image breakdown; only populated by heavy replies, empty
    /// otherwise.
    pub images: Vec<ImageTransferStats>,
}

impl AlbumTransferStats {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            bytes: json::u64_field(obj, "Bytes"),
            hits: json::u64_field(obj, "Hits"),
            small: json::u64_field(obj, "Small"),
            medium: json::u64_field(obj, "Medium"),
            large: json::u64_field(obj, "Large"),
            original: json::u64_field(obj, "Original"),
            images: json::object_list(obj, "Images", ImageTransferStats::from_json),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_u64(&mut obj, "Bytes", self.bytes);
        json::put_u64(&mut obj, "Hits", self.hits);
        json::put_u64(&mut obj, "Small", self.small);
        json::put_u64(&mut obj, "Medium", self.medium);
        json::put_u64(&mut obj, "Large", self.large);
        json::put_u64(&mut obj, "Original", self.original);
        if !self.images.is_empty() {
            obj.insert(
                "Images".to_string(),
                Value::Array(self.images.iter().map(ImageTransferStats::to_json).collect()),
            );
        }
        Value::Object(obj)
    }
}

/// Per-image transfer totals nested inside [`AlbumTransferStats`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageTransferStats {
    pub id: Option<u64>,
    pub bytes: Option<u64>,
    pub hits: Option<u64>,
    pub small: Option<u64>,
    pub medium: Option<u64>,
    pub large: Option<u64>,
    pub original: Option<u64>,
}

impl ImageTransferStats {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            bytes: json::u64_field(obj, "Bytes"),
            hits: json::u64_field(obj, "Hits"),
            small: json::u64_field(obj, "Small"),
            medium: json::u64_field(obj, "Medium"),
            large: json::u64_field(obj, "Large"),
            original: json::u64_field(obj, "Original"),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_u64(&mut obj, "Bytes", self.bytes);
        json::put_u64(&mut obj, "Hits", self.hits);
        json::put_u64(&mut obj, "Small", self.small);
        json::put_u64(&mut obj, "Medium", self.medium);
        json::put_u64(&mut obj, "Large", self.large);
        json::put_u64(&mut obj, "Original", self.original);
        Value::Object(obj)
    }
}
