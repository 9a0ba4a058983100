//! The singleton profile record

use crate::ProfileField;
use serde::{Deserialize, Serialize};

/// Personal and contact information shown at the top of every template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    /// Headline or desired position
    pub position: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Free-text summary
    pub about: String,
}

impl Profile {
    /// Read one field
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Position => &self.position,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::About => &self.about,
        }
    }

    /// Return a copy with one field replaced
    pub fn with_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut profile = self.clone();
        *profile.field_mut(field) = value.into();
        profile
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Position => &mut self.position,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::About => &mut self.about,
        }
    }
}
