//! Input validation for pet data.

use crate::error::{PetStoreError, Result};

/// Maximum allowed length for a pet name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a breed.
pub const MAX_BREED_LENGTH: usize = 200;

/// Maximum allowed length for a pet ID.
pub const MAX_ID_LENGTH: usize = 64;

/// Characters forbidden in IDs to prevent path traversal.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates a pet name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PetStoreError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(PetStoreError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a breed.
pub fn validate_breed(breed: &str) -> Result<()> {
    if breed.trim().is_empty() {
        return Err(PetStoreError::Validation(
            "Breed cannot be empty".to_string(),
        ));
    }
    if breed.len() > MAX_BREED_LENGTH {
        return Err(PetStoreError::Validation(format!(
            "Breed exceeds maximum length of {} characters",
            MAX_BREED_LENGTH
        )));
    }
    Ok(())
}

/// Validates a pet ID. IDs name document files, so path traversal
/// sequences are rejected outright.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(PetStoreError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(PetStoreError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains("..") {
        return Err(PetStoreError::Validation(
            "ID cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(PetStoreError::Validation(format!(
                "ID cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_name("Rex").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&name).is_err());
    }

    #[test]
    fn test_valid_breed() {
        assert!(validate_breed("Labrador").is_ok());
    }

    #[test]
    fn test_empty_breed_rejected() {
        assert!(validate_breed("").is_err());
    }

    #[test]
    fn test_valid_id() {
        assert!(validate_id("65f2a8c91b3d4e0f7a6b5c4d").is_ok());
    }

    #[test]
    fn test_traversal_id_rejected() {
        assert!(validate_id("../escape").is_err());
        assert!(validate_id("a/b").is_err());
        assert!(validate_id("a\\b").is_err());
        assert!(validate_id("").is_err());
    }
}
