//! Book-sharing domain rules: request status model and field validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length for book title and author fields.
const MAX_FIELD_LEN: usize = 200;

/// Status of a collector's request for a book.
///
/// Stored in Postgres as the `request_status` enum type. There is no
/// workflow engine behind these values; the book's owner sets them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
    Completed,
}

/// Validate a book title: non-empty after trimming, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Book title must not be empty".into()));
    }
    if trimmed.len() > MAX_FIELD_LEN {
        return Err(CoreError::Validation(format!(
            "Book title must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a book author: non-empty after trimming, bounded length.
pub fn validate_author(author: &str) -> Result<(), CoreError> {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Book author must not be empty".into()));
    }
    if trimmed.len() > MAX_FIELD_LEN {
        return Err(CoreError::Validation(format!(
            "Book author must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title_and_author() {
        assert!(validate_title("The Pragmatic Programmer").is_ok());
        assert!(validate_author("Hunt & Thomas").is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(validate_title("   ").is_err());
        assert!(validate_author("").is_err());
    }

    #[test]
    fn test_overlong_title_rejected() {
        let long = "x".repeat(MAX_FIELD_LEN + 1);
        assert!(validate_title(&long).is_err());
    }
}
