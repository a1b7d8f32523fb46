// Built-in contact form validators

use crate::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Mail providers accepted by [`is_allowed_email`].
pub const ALLOWED_EMAIL_DOMAINS: [&str; 8] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "icloud.com",
    "gmail.es",
    "yahoo.es",
    "hotmail.es",
    "icloud.es",
];

pub const NAME_MIN_LENGTH: usize = 3;

pub const COMMENTS_MIN_LENGTH: usize = 10;

// Case-sensitive, anchored on both ends.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9._%+-]+@(gmail\.com|yahoo\.com|hotmail\.com|icloud\.com|gmail\.es|yahoo\.es|hotmail\.es|icloud\.es)$",
    )
    .unwrap()
});

// +504, at most one form whitespace, then 8 ASCII digits led by 2, 3, 8 or 9.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+504[[\s\x{FEFF}]--\x{85}]?[2389][0-9]{7}$").unwrap());

// Predicates

pub fn is_allowed_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_honduras_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Whitespace as browsers see it in form values: Unicode white space plus
/// the byte order mark, minus NEL (U+0085).
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// True when something other than whitespace remains.
pub fn is_not_blank(value: &str) -> bool {
    !trim_form_value(value).is_empty()
}

/// Trimmed length in UTF-16 code units, so `"😀"` counts as 2.
pub fn has_min_trimmed_length(value: &str, min: usize) -> bool {
    trim_form_value(value).encode_utf16().count() >= min
}

// Field validators

/// Validates that a value is not empty after trimming
pub struct NotBlank;

impl NotBlank {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if is_not_blank(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} should not be empty", field))
                    .with_constraint("notBlank"),
            )
        }
    }
}

/// Validates the minimum trimmed length
pub struct MinTrimmedLength(pub usize);

impl MinTrimmedLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if has_min_trimmed_length(value, self.0) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", field, self.0),
            )
            .with_constraint("minTrimmedLength")
            .with_value(value))
        }
    }
}

/// Validates an address at one of the [`ALLOWED_EMAIL_DOMAINS`]
pub struct IsAllowedEmail;

impl IsAllowedEmail {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if is_allowed_email(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be an address at an allowed provider", field),
            )
            .with_constraint("isAllowedEmail")
            .with_value(value))
        }
    }
}

/// Validates a `+504` phone number
pub struct IsHondurasPhone;

impl IsHondurasPhone {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if is_honduras_phone(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be a +504 number of 8 digits", field),
            )
            .with_constraint("isHondurasPhone")
            .with_value(value))
        }
    }
}
