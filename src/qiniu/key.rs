//! Storage key generation

use chrono::Utc;

/// Prefix every generated key starts with
pub const KEY_PREFIX: &str = "bed/";

/// Generate a storage key for `file_name` using the current time.
///
/// See [`generate_key_at`] for the format.
pub fn generate_key(file_name: &str) -> String {
    generate_key_at(file_name, Utc::now().timestamp_millis())
}

/// Generate a storage key of the form `bed/<millis>.<ext>`.
///
/// The extension is everything after the last `.` in `file_name`, used
/// verbatim. A name without any `.` is used whole as the extension, so
/// `generate_key_at("README", 5)` is `bed/5.README`. Two calls in the same
/// millisecond with the same extension produce the same key.
pub fn generate_key_at(file_name: &str, timestamp_millis: i64) -> String {
    let ext = extension(file_name);
    format!("{KEY_PREFIX}{timestamp_millis}.{ext}")
}

fn extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}
