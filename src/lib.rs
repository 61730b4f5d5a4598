/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # SmugMug Legacy
//!
//! Client library for the SmugMug legacy 1.2.x JSON-over-HTTP interface.
//!
//! Every remote method is a form-encoded POST carrying a `method` field and
//! the method's ordered arguments; image upload additionally speaks a
//! raw-byte PUT with `X-Smug-*` metadata headers. Replies are JSON objects
//! wrapped in a universal `stat`/`code`/`message` envelope.
//!
//! ## Features
//!
//! - Session login (password, password hash, anonymous) and logout
//! - Album, category/subcategory, and album-template information and CRUD
//! - Image information, URLs, EXIF data, and settings
//! - Transfer statistics (per user and per album)
//! - Binary PUT upload, plus the legacy Base64 and from-URL upload paths
//! - Lower level interface for invoking methods this library doesn't bind
//!
//! *Service-reported failures (`stat=fail`) are surfaced as data on the
//! response envelope, not as errors: bad credentials or a missing album is
//! a normal reply, while transport and parse failures are `Err` values.*
//!
//! ## Usage
//!
//! **You will need an API key from SmugMug prior to using the API**
//!
//! ```rust,no_run
//! use smugmug_legacy::v1_2::{Client, Creds, SmugMugError};
//!
//! async fn list_titles(api_key: &str, email: &str, password: &str)
//!     -> Result<(), SmugMugError>
//! {
//!     let client = Client::new(Creds::from_api_key(api_key));
//!
//!     let login = client.login_with_password(email, password).await?;
//!     if let Some(err) = &login.envelope.error {
//!         eprintln!("login refused: {} ({})", err.message, err.code);
//!         return Ok(());
//!     }
//!     let login = login.payload.unwrap_or_default();
//!     let session_id = login.session_id.unwrap_or_default();
//!
//!     let albums = client
//!         .albums_get(&session_id, None, false, None, None)
//!         .await?;
//!     for album in albums.payload.unwrap_or_default() {
//!         println!("{}", album.title.unwrap_or_default());
//!     }
//!
//!     client.logout(&session_id).await?;
//!     Ok(())
//! }
//! ```
pub mod v1_2;
