//! Receipt file-name validation.
//!
//! The check runs on the trailing extension of the file name, never the MIME
//! type the browser reports: MIME types are caller-controlled and unreliable.

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Sentence listing the accepted formats, for the rejection alert.
pub fn accepted_formats() -> String {
    format!(
        "Le justificatif doit être au format {}.",
        ALLOWED_EXTENSIONS.join(", ")
    )
}

/// True when the file name ends in an allowed image extension,
/// case-insensitively.
pub fn extension_allowed(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
