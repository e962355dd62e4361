//! Validation helpers used by the settings derive

use validator::ValidationError;

fn has_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

/// Validate a bare file name (no directories, not `.` or `..`)
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("empty_file_name"));
    }

    if has_separator(name) || name == "." || name == ".." {
        return Err(ValidationError::new("invalid_file_name"));
    }

    Ok(())
}

/// Validate a language code usable as a folder name under the locale root
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.trim() != code {
        return Err(ValidationError::new("language_code_whitespace"));
    }

    // Dot-prefixed folders are never discovered as languages.
    if has_separator(code) || code.starts_with('.') {
        return Err(ValidationError::new("invalid_language_code"));
    }

    Ok(())
}
