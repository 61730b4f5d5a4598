/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod album;
pub mod category;
pub mod client;
pub mod errors;
pub mod image;
pub mod json;
pub mod login;
mod macros;
pub mod method;
pub mod response;
pub mod stats;
pub mod upload;

pub use album::*;
pub use api::*;
pub use category::*;
pub use client::*;
pub use errors::*;
pub use image::*;
pub use login::*;
pub use method::*;
pub use response::*;
pub use stats::*;
pub use upload::*;
