/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! The static description of one legacy API operation.
//!
//! Every remote method is a [`MethodDescriptor`]: its wire name plus its
//! ordered argument-name list. The catalog in [`ops`] is the complete set
//! the typed [`crate::v1_2::Client`] methods are wired from; values supplied
//! at call time pair with the names positionally.

/// Identifies one remote operation: wire name and ordered argument names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    name: &'static str,
    arg_names: &'static [&'static str],
}

impl MethodDescriptor {
    pub const fn new(name: &'static str, arg_names: &'static [&'static str]) -> Self {
        Self { name, arg_names }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arg_names(&self) -> &'static [&'static str] {
        self.arg_names
    }
}

/// Scalar to wire-string conversion for request arguments.
///
/// Booleans render as `"0"`/`"1"` per the service's convention, numbers in
/// plain decimal, and `None` renders as absent (the pair is omitted, the
/// literal string "null" is never sent).
pub trait ArgValue {
    fn to_arg(&self) -> Option<String>;
}

impl<T: ArgValue + ?Sized> ArgValue for &T {
    fn to_arg(&self) -> Option<String> {
        (**self).to_arg()
    }
}

impl<T: ArgValue> ArgValue for Option<T> {
    fn to_arg(&self) -> Option<String> {
        self.as_ref().and_then(ArgValue::to_arg)
    }
}

impl ArgValue for str {
    fn to_arg(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ArgValue for String {
    fn to_arg(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ArgValue for bool {
    fn to_arg(&self) -> Option<String> {
        Some(if *self { "1" } else { "0" }.to_string())
    }
}

macro_rules! arg_value_for_number {
    ($($t:ty),*) => {
        $(impl ArgValue for $t {
            fn to_arg(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

arg_value_for_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// The operation catalog.
///
/// One descriptor per vendor method. Where API 1.2.1 extends a 1.2.0
/// argument list the catalog carries a second const for it; the client
/// picks by its configured [`crate::v1_2::ApiVersion`]. A version is a set
/// of argument-list overrides over the shared engine, nothing more.
pub mod ops {
    use super::MethodDescriptor;

    pub const LOGIN_WITH_PASSWORD: MethodDescriptor = MethodDescriptor::new(
        "smugmug.login.withPassword",
        &["APIKey", "EmailAddress", "Password"],
    );
    pub const LOGIN_WITH_HASH: MethodDescriptor = MethodDescriptor::new(
        "smugmug.login.withHash",
        &["APIKey", "UserID", "PasswordHash"],
    );
    pub const LOGIN_ANONYMOUSLY: MethodDescriptor =
        MethodDescriptor::new("smugmug.login.anonymously", &["APIKey"]);
    pub const LOGOUT: MethodDescriptor = MethodDescriptor::new("smugmug.logout", &["SessionID"]);

    pub const ALBUMS_GET: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.get",
        &["SessionID", "NickName", "Heavy", "SitePassword"],
    );
    // 1.2.1 allows trimming the reply to selected fields
    pub const ALBUMS_GET_1_2_1: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.get",
        &["SessionID", "NickName", "Heavy", "SitePassword", "Extras"],
    );
    pub const ALBUMS_GET_INFO: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.getInfo",
        &["SessionID", "AlbumID", "AlbumKey", "Password", "SitePassword"],
    );
    pub const ALBUMS_CREATE: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.create",
        &[
            "SessionID",
            "Title",
            "CategoryID",
            "SubCategoryID",
            "Description",
            "Keywords",
            "AlbumTemplateID",
            "Public",
            "Password",
            "PasswordHint",
            "Position",
        ],
    );
    pub const ALBUMS_CHANGE_SETTINGS: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.changeSettings",
        &[
            "SessionID",
            "AlbumID",
            "Title",
            "CategoryID",
            "SubCategoryID",
            "Description",
            "Keywords",
            "AlbumTemplateID",
            "Public",
            "Password",
            "PasswordHint",
            "Position",
        ],
    );
    pub const ALBUMS_DELETE: MethodDescriptor =
        MethodDescriptor::new("smugmug.albums.delete", &["SessionID", "AlbumID"]);
    pub const ALBUMS_GET_STATS: MethodDescriptor = MethodDescriptor::new(
        "smugmug.albums.getStats",
        &["SessionID", "AlbumID", "Month", "Year", "Heavy"],
    );

    pub const ALBUMTEMPLATES_GET: MethodDescriptor =
        MethodDescriptor::new("smugmug.albumtemplates.get", &["SessionID"]);

    pub const IMAGES_GET: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.get",
        &["SessionID", "AlbumID", "AlbumKey", "Heavy", "Password", "SitePassword"],
    );
    pub const IMAGES_GET_1_2_1: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.get",
        &[
            "SessionID",
            "AlbumID",
            "AlbumKey",
            "Heavy",
            "Password",
            "SitePassword",
            "Extras",
        ],
    );
    pub const IMAGES_GET_INFO: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.getInfo",
        &["SessionID", "ImageID", "ImageKey", "Password", "SitePassword"],
    );
    pub const IMAGES_GET_URLS: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.getURLs",
        &[
            "SessionID",
            "ImageID",
            "ImageKey",
            "TemplateID",
            "Password",
            "SitePassword",
        ],
    );
    pub const IMAGES_GET_EXIF: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.getEXIF",
        &["SessionID", "ImageID", "ImageKey", "Password", "SitePassword"],
    );
    pub const IMAGES_CHANGE_SETTINGS: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.changeSettings",
        &["SessionID", "ImageID", "AlbumID", "Caption", "Keywords", "Hidden"],
    );
    pub const IMAGES_CHANGE_POSITION: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.changePosition",
        &["SessionID", "ImageID", "Position"],
    );
    pub const IMAGES_DELETE: MethodDescriptor =
        MethodDescriptor::new("smugmug.images.delete", &["SessionID", "ImageID"]);
    pub const IMAGES_UPLOAD: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.upload",
        &[
            "SessionID",
            "Data",
            "FileName",
            "AlbumID",
            "ImageID",
            "ByteCount",
            "MD5Sum",
            "Caption",
            "Keywords",
        ],
    );
    pub const IMAGES_UPLOAD_FROM_URL: MethodDescriptor = MethodDescriptor::new(
        "smugmug.images.uploadFromURL",
        &[
            "SessionID",
            "AlbumID",
            "URL",
            "Caption",
            "Keywords",
            "Hidden",
            "ByteCount",
            "MD5Sum",
        ],
    );

    pub const CATEGORIES_GET: MethodDescriptor = MethodDescriptor::new(
        "smugmug.categories.get",
        &["SessionID", "NickName", "SitePassword"],
    );
    pub const CATEGORIES_CREATE: MethodDescriptor =
        MethodDescriptor::new("smugmug.categories.create", &["SessionID", "Name"]);
    pub const CATEGORIES_RENAME: MethodDescriptor = MethodDescriptor::new(
        "smugmug.categories.rename",
        &["SessionID", "CategoryID", "Name"],
    );
    pub const CATEGORIES_DELETE: MethodDescriptor =
        MethodDescriptor::new("smugmug.categories.delete", &["SessionID", "CategoryID"]);

    pub const SUBCATEGORIES_GET: MethodDescriptor = MethodDescriptor::new(
        "smugmug.subcategories.get",
        &["SessionID", "CategoryID", "NickName", "SitePassword"],
    );
    pub const SUBCATEGORIES_GET_ALL: MethodDescriptor = MethodDescriptor::new(
        "smugmug.subcategories.getAll",
        &["SessionID", "NickName", "SitePassword"],
    );
    pub const SUBCATEGORIES_CREATE: MethodDescriptor = MethodDescriptor::new(
        "smugmug.subcategories.create",
        &["SessionID", "CategoryID", "Name"],
    );
    pub const SUBCATEGORIES_RENAME: MethodDescriptor = MethodDescriptor::new(
        "smugmug.subcategories.rename",
        &["SessionID", "SubCategoryID", "Name"],
    );
    pub const SUBCATEGORIES_DELETE: MethodDescriptor = MethodDescriptor::new(
        "smugmug.subcategories.delete",
        &["SessionID", "SubCategoryID"],
    );

    pub const USERS_GET_TREE: MethodDescriptor = MethodDescriptor::new(
        "smugmug.users.getTree",
        &["SessionID", "NickName", "Heavy", "SitePassword"],
    );
    pub const USERS_GET_TRANSFER_STATS: MethodDescriptor = MethodDescriptor::new(
        "smugmug.users.getTransferStats",
        &["SessionID", "Month", "Year", "Heavy"],
    );
}
