// Typed contact form values

use crate::validators::{
    COMMENTS_MIN_LENGTH, IsAllowedEmail, IsHondurasPhone, MinTrimmedLength, NAME_MIN_LENGTH,
    NotBlank,
};
use crate::{FieldView, FormError, Validate, ValidationErrors};
use formguard_config::FieldIds;
use serde::{Deserialize, Serialize};

/// Contact form values as plain data, e.g. a deserialized draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub comments: String,
}

impl ContactForm {
    /// Read current values out of a view.
    pub fn read_from<V>(view: &V, fields: &FieldIds) -> Result<Self, FormError>
    where
        V: FieldView + ?Sized,
    {
        Ok(Self {
            email: view.get_value(&fields.email)?,
            phone: view.get_value(&fields.phone)?,
            first_name: view.get_value(&fields.first_name)?,
            last_name: view.get_value(&fields.last_name)?,
            comments: view.get_value(&fields.comments)?,
        })
    }
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let name_length = MinTrimmedLength(NAME_MIN_LENGTH);
        let results = [
            IsAllowedEmail::validate(&self.email, "email"),
            IsHondurasPhone::validate(&self.phone, "phone"),
            NotBlank::validate(&self.first_name, "first_name"),
            name_length.validate(&self.first_name, "first_name"),
            NotBlank::validate(&self.last_name, "last_name"),
            name_length.validate(&self.last_name, "last_name"),
            MinTrimmedLength(COMMENTS_MIN_LENGTH).validate(&self.comments, "comments"),
        ];

        let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}
