/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_2::image::Image;
use crate::v1_2::json::{self, JsonObject};
use crate::v1_2::macros::args;
use chrono::NaiveDateTime;
use serde_json::Value;

/// Holds information returned for an album.
///
/// Every field is optional: the service varies what it returns by method
/// and by the `Heavy` flag, and a missing field is simply absent. See the
/// legacy 1.2 API reference for the individual fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Album {
    pub id: Option<u64>,
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub category_id: Option<u64>,
    pub sub_category_id: Option<u64>,
    pub position: Option<u64>,
    pub image_count: Option<u64>,
    pub is_public: Option<bool>,
    pub password: Option<String>,
    pub password_hint: Option<String>,
    pub last_updated: Option<NaiveDateTime>,
    pub highlight: Option<Box<Image>>,
}

impl Album {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            key: json::string_field(obj, "Key"),
            title: json::string_field(obj, "Title"),
            description: json::string_field(obj, "Description"),
            keywords: json::string_field(obj, "Keywords"),
            // Heavy replies nest the owning category, light ones flatten it
            category_id: json::object_field(obj, "Category")
                .and_then(|c| json::u64_field(c, "id"))
                .or_else(|| json::u64_field(obj, "CategoryID")),
            sub_category_id: json::object_field(obj, "SubCategory")
                .and_then(|c| json::u64_field(c, "id"))
                .or_else(|| json::u64_field(obj, "SubCategoryID")),
            position: json::u64_field(obj, "Position"),
            image_count: json::u64_field(obj, "ImageCount"),
            is_public: json::bool_field(obj, "Public"),
            password: json::string_field(obj, "Password"),
            password_hint: json::string_field(obj, "PasswordHint"),
            last_updated: json::date_time_field(obj, "LastUpdated"),
            highlight: json::object_field(obj, "Highlight")
                .map(|o| Box::new(Image::from_json(o))),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_string(&mut obj, "Key", &self.key);
        json::put_string(&mut obj, "Title", &self.title);
        json::put_string(&mut obj, "Description", &self.description);
        json::put_string(&mut obj, "Keywords", &self.keywords);
        json::put_u64(&mut obj, "CategoryID", self.category_id);
        json::put_u64(&mut obj, "SubCategoryID", self.sub_category_id);
        json::put_u64(&mut obj, "Position", self.position);
        json::put_u64(&mut obj, "ImageCount", self.image_count);
        json::put_bool(&mut obj, "Public", self.is_public);
        json::put_string(&mut obj, "Password", &self.password);
        json::put_string(&mut obj, "PasswordHint", &self.password_hint);
        json::put_date_time(&mut obj, "LastUpdated", self.last_updated);
        if let Some(highlight) = &self.highlight {
            obj.insert("Highlight".to_string(), highlight.to_json());
        }
        Value::Object(obj)
    }
}

/// Holds information returned for an album template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumTemplate {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub is_public: Option<bool>,
    pub password: Option<String>,
    pub password_hint: Option<String>,
}

impl AlbumTemplate {
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            name: json::string_field(obj, "AlbumTemplateName"),
            is_public: json::bool_field(obj, "Public"),
            password: json::string_field(obj, "Password"),
            password_hint: json::string_field(obj, "PasswordHint"),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_string(&mut obj, "AlbumTemplateName", &self.name);
        json::put_bool(&mut obj, "Public", self.is_public);
        json::put_string(&mut obj, "Password", &self.password);
        json::put_string(&mut obj, "PasswordHint", &self.password_hint);
        Value::Object(obj)
    }
}

/// Properties used when creating an album or changing its settings.
///
/// Unset fields are not sent, leaving the service defaults (or the current
/// settings) untouched.
#[derive(Debug, Clone, Default)]
pub struct AlbumSettings {
    pub title: Option<String>,
    pub category_id: Option<u64>,
    pub sub_category_id: Option<u64>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub template_id: Option<u64>,
    pub is_public: Option<bool>,
    pub password: Option<String>,
    pub password_hint: Option<String>,
    pub position: Option<u64>,
}

impl AlbumSettings {
    // Order matches the albums.create/albums.changeSettings descriptors
    // after their leading SessionID (and AlbumID) arguments.
    pub(crate) fn to_args(&self) -> Vec<Option<String>> {
        args![
            self.title,
            self.category_id,
            self.sub_category_id,
            self.description,
            self.keywords,
            self.template_id,
            self.is_public,
            self.password,
            self.password_hint,
            self.position,
        ]
    }
}
