/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_2::album::Album;
use crate::v1_2::json::{self, JsonObject};
use serde_json::Value;

/// Holds information returned for a category or subcategory.
///
/// Categories form a display tree: a category owns zero or more albums and
/// zero or more subcategories. The lists are always present, empty when the
/// reply carried none. `parent_id` is a lookup back-reference only, not
/// part of the ownership tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub nice_name: Option<String>,
    pub parent_id: Option<u64>,
    pub albums: Vec<Album>,
    pub subcategories: Vec<Category>,
}

impl Category {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        Self {
            id: json::u64_field(obj, "id"),
            // 1.2.0 calls it Name, some replies use Title
            name: json::string_field(obj, "Name")
                .or_else(|| json::string_field(obj, "Title")),
            nice_name: json::string_field(obj, "NiceName"),
            parent_id: json::object_field(obj, "Category")
                .and_then(|c| json::u64_field(c, "id")),
            albums: json::object_list(obj, "Albums", Album::from_json),
            subcategories: json::object_list(obj, "SubCategories", Category::from_json),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields and empty
    /// lists.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        json::put_u64(&mut obj, "id", self.id);
        json::put_string(&mut obj, "Name", &self.name);
        json::put_string(&mut obj, "NiceName", &self.nice_name);
        if let Some(parent_id) = self.parent_id {
            let mut parent = JsonObject::new();
            parent.insert("id".to_string(), Value::from(parent_id));
            obj.insert("Category".to_string(), Value::Object(parent));
        }
        if !self.albums.is_empty() {
            obj.insert(
                "Albums".to_string(),
                Value::Array(self.albums.iter().map(Album::to_json).collect()),
            );
        }
        if !self.subcategories.is_empty() {
            obj.insert(
                "SubCategories".to_string(),
                Value::Array(self.subcategories.iter().map(Category::to_json).collect()),
            );
        }
        Value::Object(obj)
    }
}
