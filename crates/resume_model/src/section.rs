//! Section and field keys
//!
//! Every editable location in the resume is addressed by a strongly typed key
//! instead of a free-form string. Outer surfaces that only have string keys
//! go through the `parse` functions, which reject anything unknown.

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// One of the three ordered entry collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Experience, Section::Education, Section::Skills];

    /// Stable string key of this section
    pub fn key(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }

    /// Parse a section key such as `"experience"`
    pub fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| ModelError::UnknownSection(key.to_string()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A field of the singleton profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    /// Headline or desired position
    Position,
    Email,
    Phone,
    Location,
    /// Free-text summary
    About,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FullName,
        ProfileField::Position,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
        ProfileField::About,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Position => "position",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Location => "location",
            ProfileField::About => "about",
        }
    }

    pub fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| ModelError::UnknownField {
                section: "basic".to_string(),
                field: key.to_string(),
            })
    }
}

/// A field of an experience entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Company,
        ExperienceField::Position,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Position => "position",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Description => "description",
        }
    }
}

/// A field of an education entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    /// Degree or field of study
    Degree,
    StartDate,
    EndDate,
    Description,
}

impl EducationField {
    pub const ALL: [EducationField; 5] = [
        EducationField::Institution,
        EducationField::Degree,
        EducationField::StartDate,
        EducationField::EndDate,
        EducationField::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EducationField::Institution => "institution",
            EducationField::Degree => "degree",
            EducationField::StartDate => "startDate",
            EducationField::EndDate => "endDate",
            EducationField::Description => "description",
        }
    }
}

/// A field of a skill entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillField {
    Name,
    Level,
}

impl SkillField {
    pub const ALL: [SkillField; 2] = [SkillField::Name, SkillField::Level];

    pub fn key(self) -> &'static str {
        match self {
            SkillField::Name => "name",
            SkillField::Level => "level",
        }
    }
}

/// An already-typed value supplied by an input control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i32),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value)
    }
}

/// A replacement of one field on one entry, typed per section.
///
/// No coercion happens here: a skill level must arrive as a number, every
/// other field as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum EntryUpdate {
    Experience { field: ExperienceField, value: String },
    Education { field: EducationField, value: String },
    SkillName { value: String },
    SkillLevel { value: i32 },
}

impl EntryUpdate {
    /// The collection this update targets
    pub fn section(&self) -> Section {
        match self {
            EntryUpdate::Experience { .. } => Section::Experience,
            EntryUpdate::Education { .. } => Section::Education,
            EntryUpdate::SkillName { .. } | EntryUpdate::SkillLevel { .. } => Section::Skills,
        }
    }

    /// Build an update from string keys, as delivered by an untyped surface
    pub fn parse(section: Section, field: &str, value: FieldValue) -> Result<Self> {
        let unknown = || ModelError::UnknownField {
            section: section.key().to_string(),
            field: field.to_string(),
        };

        match (section, value) {
            (Section::Experience, FieldValue::Text(value)) => ExperienceField::ALL
                .into_iter()
                .find(|f| f.key() == field)
                .map(|field| EntryUpdate::Experience { field, value })
                .ok_or_else(unknown),
            (Section::Education, FieldValue::Text(value)) => EducationField::ALL
                .into_iter()
                .find(|f| f.key() == field)
                .map(|field| EntryUpdate::Education { field, value })
                .ok_or_else(unknown),
            (Section::Skills, FieldValue::Text(value)) if field == SkillField::Name.key() => {
                Ok(EntryUpdate::SkillName { value })
            }
            (Section::Skills, FieldValue::Number(value)) if field == SkillField::Level.key() => {
                Ok(EntryUpdate::SkillLevel { value })
            }
            (Section::Skills, _) if SkillField::ALL.iter().any(|f| f.key() == field) => {
                Err(ModelError::ValueMismatch(field.to_string()))
            }
            (_, FieldValue::Number(_)) if section != Section::Skills => {
                Err(ModelError::ValueMismatch(field.to_string()))
            }
            _ => Err(unknown()),
        }
    }
}
