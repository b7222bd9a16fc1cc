use thiserror::Error;

pub const USERNAME_MIN_CHARS: usize = 2;
pub const USERNAME_MAX_CHARS: usize = 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This value should not be blank.")]
    Blank,

    #[error("This value is too short. It should have {min} characters or more.")]
    TooShort { min: usize },

    #[error("This value is too long. It should have {max} characters or less.")]
    TooLong { max: usize },
}

/// Validate the profile form's username field.
///
/// Length limits count characters, not bytes. Returns the accepted value
/// unchanged so the caller can forward it.
pub fn validate_username(value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank);
    }

    let chars = value.chars().count();

    if chars < USERNAME_MIN_CHARS {
        return Err(ValidationError::TooShort {
            min: USERNAME_MIN_CHARS,
        });
    }

    if chars > USERNAME_MAX_CHARS {
        return Err(ValidationError::TooLong {
            max: USERNAME_MAX_CHARS,
        });
    }

    Ok(value.to_string())
}
