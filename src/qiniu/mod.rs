//! Qiniu image bed operations
//!
//! Four remote calls against the image bed API plus local key generation.
//!
//! | Operation | Request |
//! |---|---|
//! | [`FileHost::request_upload_token`] | `GET /qiniu/upload-token` |
//! | [`FileHost::upload_file`] | `POST /qiniu/upload` (multipart, field `file`) |
//! | [`FileHost::delete_file`] | `DELETE /qiniu/{key}` |
//! | [`FileHost::fetch_domain`] | `GET /qiniu/domain` |
//!
//! The key returned by [`generate_key`] is not sent with the upload and is
//! never reconciled with the key the server stores; read the upload
//! response for that.

mod client;
mod file;
mod key;

pub use client::{
    FileHost, QiniuClient, DELETE_PREFIX, DOMAIN_PATH, UPLOAD_PATH, UPLOAD_TOKEN_PATH,
};
pub use file::{UploadFile, UPLOAD_FIELD};
pub use key::{generate_key, generate_key_at, KEY_PREFIX};

#[cfg(test)]
mod tests;
