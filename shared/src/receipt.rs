use thiserror::Error;

/// Extensions accepted for receipt images, compared case-insensitively
pub const ALLOWED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Message shown to the employee when a receipt is refused
pub const INVALID_RECEIPT_MESSAGE: &str = "Seuls les fichiers jpg, jpeg ou png sont acceptés.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    #[error("file {0:?} has no extension")]
    MissingExtension(String),
    #[error("extension {extension:?} of {file_name:?} is not an accepted receipt format")]
    UnsupportedExtension { file_name: String, extension: String },
}

/// Check a receipt file name against the accepted extensions.
///
/// Only the name is inspected; the content is not sniffed.
pub fn validate_receipt_file_name(file_name: &str) -> Result<(), FileValidationError> {
    let extension = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() || !ext.is_empty() => ext,
        _ => return Err(FileValidationError::MissingExtension(file_name.to_string())),
    };

    if ALLOWED_RECEIPT_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    {
        Ok(())
    } else {
        Err(FileValidationError::UnsupportedExtension {
            file_name: file_name.to_string(),
            extension: extension.to_string(),
        })
    }
}
