/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1_2::json::{self, JsonObject};
use serde_json::Value;

/// Holds the payload of a successful login.
///
/// The session id goes into every subsequent call; `password_hash` can be
/// cached for [`crate::v1_2::Client::login_with_hash`] so the clear-text
/// password is only ever sent once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Login {
    pub session_id: Option<String>,
    pub account_type: Option<String>,
    pub file_size_limit: Option<u64>,
    pub user_id: Option<u64>,
    pub nick_name: Option<String>,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
    pub has_smug_vault: Option<bool>,
}

impl Login {
    /// Tolerant construction from a parsed reply fragment.
    pub fn from_json(obj: &JsonObject) -> Self {
        let user = json::object_field(obj, "User");
        Self {
            session_id: json::object_field(obj, "Session")
                .and_then(|s| json::string_field(s, "id")),
            account_type: json::string_field(obj, "AccountType"),
            file_size_limit: json::u64_field(obj, "FileSizeLimit"),
            user_id: user.and_then(|u| json::u64_field(u, "id")),
            nick_name: user.and_then(|u| json::string_field(u, "NickName")),
            display_name: user.and_then(|u| json::string_field(u, "DisplayName")),
            password_hash: json::string_field(obj, "PasswordHash"),
            has_smug_vault: json::bool_field(obj, "SmugVault"),
        }
    }

    /// Renders the vendor JSON shape, omitting absent fields.
    pub fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        if let Some(session_id) = &self.session_id {
            let mut session = JsonObject::new();
            session.insert("id".to_string(), Value::String(session_id.clone()));
            obj.insert("Session".to_string(), Value::Object(session));
        }
        json::put_string(&mut obj, "AccountType", &self.account_type);
        json::put_u64(&mut obj, "FileSizeLimit", self.file_size_limit);
        if self.user_id.is_some() || self.nick_name.is_some() || self.display_name.is_some() {
            let mut user = JsonObject::new();
            json::put_u64(&mut user, "id", self.user_id);
            json::put_string(&mut user, "NickName", &self.nick_name);
            json::put_string(&mut user, "DisplayName", &self.display_name);
            obj.insert("User".to_string(), Value::Object(user));
        }
        json::put_string(&mut obj, "PasswordHash", &self.password_hash);
        json::put_bool(&mut obj, "SmugVault", self.has_smug_vault);
        Value::Object(obj)
    }
}
