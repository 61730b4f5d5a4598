/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! The typed client. Each method is a thin wiring of one catalog
//! descriptor to its ordered argument values and payload extractor; the
//! shared engine does everything else.

use crate::v1_2::album::{Album, AlbumSettings, AlbumTemplate};
use crate::v1_2::api::{ApiClient, ApiVersion, Config};
use crate::v1_2::category::Category;
use crate::v1_2::errors::SmugMugError;
use crate::v1_2::image::Image;
use crate::v1_2::json::JsonObject;
use crate::v1_2::login::Login;
use crate::v1_2::macros::args;
use crate::v1_2::method::{ops, ArgValue, MethodDescriptor};
use crate::v1_2::response::{payload, ApiResponse};
use crate::v1_2::stats::AlbumTransferStats;
use crate::v1_2::upload::{self, ImageUpload, UPLOAD_HEADERS};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use log::debug;
use std::io::Read;
use std::sync::Arc;

/// Credentials for the legacy API: the consumer API key. Session state is
/// not held here; the session id from [`Login`] is passed per call.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
}

impl Creds {
    pub fn from_api_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds").field("api_key", &"xxx").finish()
    }
}

/// Typed client for the legacy 1.2.x JSON API.
///
/// Cheap to clone; clones share the pooled HTTP connection manager.
/// Vendor-reported failures (`stat=fail`) come back as data on the
/// [`ApiResponse`] envelope, never as an `Err`.
#[derive(Debug, Clone)]
pub struct Client {
    creds: Creds,
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            api_client: Arc::new(ApiClient::with_https_client(
                Config::default(),
                reqwest::Client::new(),
            )),
        }
    }

    /// Builds a client with explicit transport configuration (origins,
    /// API version, timeouts).
    pub fn with_config(creds: Creds, config: Config) -> Result<Self, SmugMugError> {
        Ok(Self {
            creds,
            api_client: Arc::new(ApiClient::new(config)?),
        })
    }

    /// The lower-level transport, for callers binding methods this client
    /// doesn't cover.
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    fn version(&self) -> ApiVersion {
        self.api_client.config().version
    }

    /// Invokes a method against the configured endpoint and returns the
    /// raw reply text. `values` pairs positionally with the descriptor's
    /// argument names.
    pub async fn invoke(
        &self,
        descriptor: &MethodDescriptor,
        values: &[Option<String>],
    ) -> Result<String, SmugMugError> {
        let endpoint = self.api_client.method_endpoint()?;
        self.api_client
            .post_form(endpoint.as_str(), descriptor.name(), descriptor.arg_names(), values)
            .await
    }

    async fn call<T>(
        &self,
        descriptor: &MethodDescriptor,
        values: &[Option<String>],
        extract: impl FnOnce(&JsonObject) -> Result<T, SmugMugError>,
    ) -> Result<ApiResponse<T>, SmugMugError> {
        let text = self.invoke(descriptor, values).await?;
        ApiResponse::parse_with(&text, extract)
    }

    // ---- login ----

    /// Logs in with email address and clear-text password.
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<Login>, SmugMugError> {
        self.call(
            &ops::LOGIN_WITH_PASSWORD,
            &args![self.creds.api_key, email, password],
            payload::object("Login", Login::from_json),
        )
        .await
    }

    /// Logs in with a previously returned password hash.
    pub async fn login_with_hash(
        &self,
        user_id: u64,
        password_hash: &str,
    ) -> Result<ApiResponse<Login>, SmugMugError> {
        self.call(
            &ops::LOGIN_WITH_HASH,
            &args![self.creds.api_key, user_id, password_hash],
            payload::object("Login", Login::from_json),
        )
        .await
    }

    /// Opens an anonymous session for browsing public data.
    pub async fn login_anonymously(&self) -> Result<ApiResponse<Login>, SmugMugError> {
        self.call(
            &ops::LOGIN_ANONYMOUSLY,
            &args![self.creds.api_key],
            payload::object("Login", Login::from_json),
        )
        .await
    }

    /// Ends the session. Calls made with the session id afterwards fail
    /// server-side.
    pub async fn logout(&self, session_id: &str) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(&ops::LOGOUT, &args![session_id], payload::none())
            .await
    }

    // ---- albums ----

    /// Lists the albums of the session user, or of `nick_name`.
    ///
    /// `extras` asks 1.2.1 for additional reply fields and is dropped on
    /// 1.2.0, which doesn't know the argument.
    pub async fn albums_get(
        &self,
        session_id: &str,
        nick_name: Option<&str>,
        heavy: bool,
        site_password: Option<&str>,
        extras: Option<&str>,
    ) -> Result<ApiResponse<Vec<Album>>, SmugMugError> {
        let mut values = args![session_id, nick_name, heavy, site_password];
        let descriptor = match self.version() {
            ApiVersion::V1_2_0 => {
                if extras.is_some() {
                    debug!("dropping Extras argument, not supported by 1.2.0");
                }
                &ops::ALBUMS_GET
            }
            ApiVersion::V1_2_1 => {
                values.push(extras.to_arg());
                &ops::ALBUMS_GET_1_2_1
            }
        };
        self.call(descriptor, &values, payload::list("Albums", Album::from_json))
            .await
    }

    /// Fetches full settings for one album.
    pub async fn album_info(
        &self,
        session_id: &str,
        album_id: u64,
        album_key: &str,
        password: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Album>, SmugMugError> {
        self.call(
            &ops::ALBUMS_GET_INFO,
            &args![session_id, album_id, album_key, password, site_password],
            payload::object("Album", Album::from_json),
        )
        .await
    }

    /// Creates an album; the reply carries its new id and key.
    pub async fn album_create(
        &self,
        session_id: &str,
        settings: &AlbumSettings,
    ) -> Result<ApiResponse<Album>, SmugMugError> {
        let mut values = args![session_id];
        values.extend(settings.to_args());
        self.call(
            &ops::ALBUMS_CREATE,
            &values,
            payload::object("Album", Album::from_json),
        )
        .await
    }

    /// Changes settings on an existing album; unset fields are untouched.
    pub async fn album_change_settings(
        &self,
        session_id: &str,
        album_id: u64,
        settings: &AlbumSettings,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        let mut values = args![session_id, album_id];
        values.extend(settings.to_args());
        self.call(&ops::ALBUMS_CHANGE_SETTINGS, &values, payload::none())
            .await
    }

    pub async fn album_delete(
        &self,
        session_id: &str,
        album_id: u64,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::ALBUMS_DELETE,
            &args![session_id, album_id],
            payload::none(),
        )
        .await
    }

    /// Transfer statistics for one album in the given month.
    pub async fn album_stats(
        &self,
        session_id: &str,
        album_id: u64,
        month: u8,
        year: u16,
        heavy: bool,
    ) -> Result<ApiResponse<AlbumTransferStats>, SmugMugError> {
        self.call(
            &ops::ALBUMS_GET_STATS,
            &args![session_id, album_id, month, year, heavy],
            payload::object("Album", AlbumTransferStats::from_json),
        )
        .await
    }

    pub async fn album_templates(
        &self,
        session_id: &str,
    ) -> Result<ApiResponse<Vec<AlbumTemplate>>, SmugMugError> {
        self.call(
            &ops::ALBUMTEMPLATES_GET,
            &args![session_id],
            payload::list("AlbumTemplates", AlbumTemplate::from_json),
        )
        .await
    }

    // ---- images ----

    /// Lists the images of an album. See [`Self::albums_get`] for the
    /// `extras` handling.
    pub async fn images_get(
        &self,
        session_id: &str,
        album_id: u64,
        album_key: &str,
        heavy: bool,
        password: Option<&str>,
        site_password: Option<&str>,
        extras: Option<&str>,
    ) -> Result<ApiResponse<Vec<Image>>, SmugMugError> {
        let mut values = args![session_id, album_id, album_key, heavy, password, site_password];
        let descriptor = match self.version() {
            ApiVersion::V1_2_0 => {
                if extras.is_some() {
                    debug!("dropping Extras argument, not supported by 1.2.0");
                }
                &ops::IMAGES_GET
            }
            ApiVersion::V1_2_1 => {
                values.push(extras.to_arg());
                &ops::IMAGES_GET_1_2_1
            }
        };
        self.call(descriptor, &values, payload::list("Images", Image::from_json))
            .await
    }

    pub async fn image_info(
        &self,
        session_id: &str,
        image_id: u64,
        image_key: &str,
        password: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        self.call(
            &ops::IMAGES_GET_INFO,
            &args![session_id, image_id, image_key, password, site_password],
            payload::object("Image", Image::from_json),
        )
        .await
    }

    /// Fetches the display URLs for one image, optionally for a specific
    /// display template.
    pub async fn image_urls(
        &self,
        session_id: &str,
        image_id: u64,
        image_key: &str,
        template_id: Option<u64>,
        password: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        self.call(
            &ops::IMAGES_GET_URLS,
            &args![session_id, image_id, image_key, template_id, password, site_password],
            payload::object("Image", Image::from_json),
        )
        .await
    }

    /// Fetches the EXIF data for one image as a raw object; the service's
    /// EXIF key set is open-ended.
    pub async fn image_exif(
        &self,
        session_id: &str,
        image_id: u64,
        image_key: &str,
        password: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<JsonObject>, SmugMugError> {
        self.call(
            &ops::IMAGES_GET_EXIF,
            &args![session_id, image_id, image_key, password, site_password],
            payload::raw_object("Image"),
        )
        .await
    }

    pub async fn image_change_settings(
        &self,
        session_id: &str,
        image_id: u64,
        album_id: Option<u64>,
        caption: Option<&str>,
        keywords: Option<&str>,
        hidden: Option<bool>,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::IMAGES_CHANGE_SETTINGS,
            &args![session_id, image_id, album_id, caption, keywords, hidden],
            payload::none(),
        )
        .await
    }

    pub async fn image_change_position(
        &self,
        session_id: &str,
        image_id: u64,
        position: u64,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::IMAGES_CHANGE_POSITION,
            &args![session_id, image_id, position],
            payload::none(),
        )
        .await
    }

    pub async fn image_delete(
        &self,
        session_id: &str,
        image_id: u64,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::IMAGES_DELETE,
            &args![session_id, image_id],
            payload::none(),
        )
        .await
    }

    // ---- categories ----

    pub async fn categories_get(
        &self,
        session_id: &str,
        nick_name: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Vec<Category>>, SmugMugError> {
        self.call(
            &ops::CATEGORIES_GET,
            &args![session_id, nick_name, site_password],
            payload::list("Categories", Category::from_json),
        )
        .await
    }

    pub async fn category_create(
        &self,
        session_id: &str,
        name: &str,
    ) -> Result<ApiResponse<Category>, SmugMugError> {
        self.call(
            &ops::CATEGORIES_CREATE,
            &args![session_id, name],
            payload::object("Category", Category::from_json),
        )
        .await
    }

    pub async fn category_rename(
        &self,
        session_id: &str,
        category_id: u64,
        name: &str,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::CATEGORIES_RENAME,
            &args![session_id, category_id, name],
            payload::none(),
        )
        .await
    }

    pub async fn category_delete(
        &self,
        session_id: &str,
        category_id: u64,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::CATEGORIES_DELETE,
            &args![session_id, category_id],
            payload::none(),
        )
        .await
    }

    pub async fn subcategories_get(
        &self,
        session_id: &str,
        category_id: u64,
        nick_name: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Vec<Category>>, SmugMugError> {
        self.call(
            &ops::SUBCATEGORIES_GET,
            &args![session_id, category_id, nick_name, site_password],
            payload::list("SubCategories", Category::from_json),
        )
        .await
    }

    pub async fn subcategories_get_all(
        &self,
        session_id: &str,
        nick_name: Option<&str>,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Vec<Category>>, SmugMugError> {
        self.call(
            &ops::SUBCATEGORIES_GET_ALL,
            &args![session_id, nick_name, site_password],
            payload::list("SubCategories", Category::from_json),
        )
        .await
    }

    pub async fn subcategory_create(
        &self,
        session_id: &str,
        category_id: u64,
        name: &str,
    ) -> Result<ApiResponse<Category>, SmugMugError> {
        self.call(
            &ops::SUBCATEGORIES_CREATE,
            &args![session_id, category_id, name],
            payload::object("SubCategory", Category::from_json),
        )
        .await
    }

    pub async fn subcategory_rename(
        &self,
        session_id: &str,
        sub_category_id: u64,
        name: &str,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::SUBCATEGORIES_RENAME,
            &args![session_id, sub_category_id, name],
            payload::none(),
        )
        .await
    }

    pub async fn subcategory_delete(
        &self,
        session_id: &str,
        sub_category_id: u64,
    ) -> Result<ApiResponse<()>, SmugMugError> {
        self.call(
            &ops::SUBCATEGORIES_DELETE,
            &args![session_id, sub_category_id],
            payload::none(),
        )
        .await
    }

    // ---- users ----

    /// The whole category/subcategory/album tree for a user.
    pub async fn user_tree(
        &self,
        session_id: &str,
        nick_name: Option<&str>,
        heavy: bool,
        site_password: Option<&str>,
    ) -> Result<ApiResponse<Vec<Category>>, SmugMugError> {
        self.call(
            &ops::USERS_GET_TREE,
            &args![session_id, nick_name, heavy, site_password],
            payload::list("Categories", Category::from_json),
        )
        .await
    }

    /// Per-album transfer statistics for the session user in the given
    /// month.
    pub async fn transfer_stats(
        &self,
        session_id: &str,
        month: u8,
        year: u16,
        heavy: bool,
    ) -> Result<ApiResponse<Vec<AlbumTransferStats>>, SmugMugError> {
        self.call(
            &ops::USERS_GET_TRANSFER_STATS,
            &args![session_id, month, year, heavy],
            payload::list("Albums", AlbumTransferStats::from_json),
        )
        .await
    }

    // ---- upload ----

    /// Uploads image bytes over the binary PUT transport. This is the
    /// preferred upload path; the body is sent as-is with the metadata in
    /// `X-Smug-*` headers.
    pub async fn upload(
        &self,
        session_id: &str,
        upload: &ImageUpload,
        data: Bytes,
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        let values = upload.header_values(session_id, self.version());
        let text = self
            .api_client
            .put_binary(
                &self.api_client.config().upload_origin,
                UPLOAD_HEADERS,
                &values,
                data,
            )
            .await?;
        ApiResponse::parse_with(&text, payload::object("Image", Image::from_json))
    }

    /// Like [`Self::upload`], but drains `reader` to memory first; the
    /// content checksum and the body must come from the same byte array.
    pub async fn upload_from_reader(
        &self,
        session_id: &str,
        upload: &ImageUpload,
        reader: &mut impl Read,
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        let data = upload::drain_reader(reader)?;
        self.upload(session_id, upload, data).await
    }

    /// Legacy upload: Base64-encodes the image into a form field of a
    /// plain `images.upload` POST. Holds roughly 2-3x the image size in
    /// memory; kept for compatibility, prefer [`Self::upload`].
    pub async fn upload_base64(
        &self,
        session_id: &str,
        upload: &ImageUpload,
        data: &[u8],
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        let encoded = BASE64.encode(data);
        let byte_count = data.len() as u64;
        let md5_sum = upload::md5_hex(data);
        self.call(
            &ops::IMAGES_UPLOAD,
            &args![
                session_id,
                encoded,
                upload.file_name,
                upload.album_id,
                upload.image_id,
                byte_count,
                md5_sum,
                upload.caption,
                upload.keywords,
            ],
            payload::object("Image", Image::from_json),
        )
        .await
    }

    /// Legacy upload: asks the service to fetch the image from `url`
    /// itself. Kept for compatibility, prefer [`Self::upload`].
    #[allow(clippy::too_many_arguments)]
    pub async fn upload_from_url(
        &self,
        session_id: &str,
        album_id: u64,
        url: &str,
        caption: Option<&str>,
        keywords: Option<&str>,
        hidden: Option<bool>,
        byte_count: Option<u64>,
        md5_sum: Option<&str>,
    ) -> Result<ApiResponse<Image>, SmugMugError> {
        self.call(
            &ops::IMAGES_UPLOAD_FROM_URL,
            &args![
                session_id, album_id, url, caption, keywords, hidden, byte_count, md5_sum
            ],
            payload::object("Image", Image::from_json),
        )
        .await
    }
}
