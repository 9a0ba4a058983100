//! Editable fields: what they bind to and how they are presented

use crate::error::Result;
use crate::range::RangeControl;
use form_store::Action;
use preview::DisplayLocale;
use resume_model::{
    EducationField, EntryId, EntryUpdate, ExperienceField, FieldValue, ModelError, ProfileField,
    ResumeData, Section, SkillField,
};
use serde::{Deserialize, Serialize};

/// The kind of input control a field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Email,
    Phone,
    /// Year and month, `YYYY-MM`
    Month,
    MultiLine,
    Range { min: i32, max: i32 },
}

/// Where an input writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum FieldTarget {
    Profile { field: ProfileField },
    Experience { id: EntryId, field: ExperienceField },
    Education { id: EntryId, field: EducationField },
    SkillName { id: EntryId },
    SkillLevel { id: EntryId },
}

impl FieldTarget {
    /// Resolve a string-keyed target, as sent by an outer surface.
    /// `id` is ignored for the `basic` section.
    pub fn parse(section: &str, id: EntryId, field: &str) -> Result<Self> {
        if section == "basic" {
            return Ok(FieldTarget::Profile {
                field: ProfileField::parse(field)?,
            });
        }
        let section = Section::parse(section)?;
        let unknown = || ModelError::UnknownField {
            section: section.key().to_string(),
            field: field.to_string(),
        };

        let target = match section {
            Section::Experience => FieldTarget::Experience {
                id,
                field: ExperienceField::ALL
                    .into_iter()
                    .find(|f| f.key() == field)
                    .ok_or_else(unknown)?,
            },
            Section::Education => FieldTarget::Education {
                id,
                field: EducationField::ALL
                    .into_iter()
                    .find(|f| f.key() == field)
                    .ok_or_else(unknown)?,
            },
            Section::Skills if field == SkillField::Name.key() => FieldTarget::SkillName { id },
            Section::Skills if field == SkillField::Level.key() => FieldTarget::SkillLevel { id },
            Section::Skills => return Err(unknown().into()),
        };
        Ok(target)
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            FieldTarget::Profile { .. } => None,
            FieldTarget::Experience { .. } => Some(Section::Experience),
            FieldTarget::Education { .. } => Some(Section::Education),
            FieldTarget::SkillName { .. } | FieldTarget::SkillLevel { .. } => Some(Section::Skills),
        }
    }

    /// Field key used by the wire format
    pub fn key(&self) -> &'static str {
        match self {
            FieldTarget::Profile { field } => field.key(),
            FieldTarget::Experience { field, .. } => field.key(),
            FieldTarget::Education { field, .. } => field.key(),
            FieldTarget::SkillName { .. } => "name",
            FieldTarget::SkillLevel { .. } => "level",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        use FieldTarget::*;
        match self {
            Profile { field: ProfileField::Email } => InputKind::Email,
            Profile { field: ProfileField::Phone } => InputKind::Phone,
            Profile { field: ProfileField::About } => InputKind::MultiLine,
            Experience { field: ExperienceField::StartDate | ExperienceField::EndDate, .. }
            | Education { field: EducationField::StartDate | EducationField::EndDate, .. } => {
                InputKind::Month
            }
            Experience { field: ExperienceField::Description, .. }
            | Education { field: EducationField::Description, .. } => InputKind::MultiLine,
            SkillLevel { .. } => InputKind::Range {
                min: RangeControl::SKILL_LEVEL.min,
                max: RangeControl::SKILL_LEVEL.max,
            },
            _ => InputKind::Text,
        }
    }

    pub fn label(&self, locale: DisplayLocale) -> &'static str {
        use FieldTarget::*;
        let (en, ru) = match self {
            Profile { field } => match field {
                ProfileField::FullName => ("Full name", "ФИО"),
                ProfileField::Position => ("Position", "Должность"),
                ProfileField::Email => ("Email", "Email"),
                ProfileField::Phone => ("Phone", "Телефон"),
                ProfileField::Location => ("Location", "Местоположение"),
                ProfileField::About => ("About", "О себе"),
            },
            Experience { field, .. } => match field {
                ExperienceField::Company => ("Company", "Компания"),
                ExperienceField::Position => ("Position", "Должность"),
                ExperienceField::StartDate => ("Start date", "Дата начала"),
                ExperienceField::EndDate => ("End date", "Дата окончания"),
                ExperienceField::Description => ("Description", "Описание"),
            },
            Education { field, .. } => match field {
                EducationField::Institution => ("Institution", "Учебное заведение"),
                EducationField::Degree => ("Degree / Major", "Степень/Специальность"),
                EducationField::StartDate => ("Start date", "Дата начала"),
                EducationField::EndDate => ("End date", "Дата окончания"),
                EducationField::Description => ("Description", "Описание"),
            },
            SkillName { .. } => ("Skill name", "Название навыка"),
            SkillLevel { .. } => ("Proficiency level", "Уровень владения"),
        };
        pick(locale, en, ru)
    }

    /// Hint shown in an empty input; month and range inputs have none
    pub fn placeholder(&self, locale: DisplayLocale) -> &'static str {
        use FieldTarget::*;
        let (en, ru) = match self {
            Profile { field } => match field {
                ProfileField::FullName => ("Enter your full name", "Введите ваше полное имя"),
                ProfileField::Position => ("e.g. Frontend Developer", "Например: Frontend Разработчик"),
                ProfileField::Email => ("email@example.com", "email@example.com"),
                ProfileField::Phone => ("+7 (XXX) XXX-XX-XX", "+7 (XXX) XXX-XX-XX"),
                ProfileField::Location => ("City, Country", "Город, Страна"),
                ProfileField::About => (
                    "A short summary of your professional experience and skills",
                    "Краткое описание вашего профессионального опыта и навыков",
                ),
            },
            Experience { field, .. } => match field {
                ExperienceField::Company => ("Company name", "Название компании"),
                ExperienceField::Position => ("Your position", "Ваша должность"),
                ExperienceField::Description => (
                    "Describe your responsibilities and achievements",
                    "Опишите ваши обязанности и достижения",
                ),
                _ => ("", ""),
            },
            Education { field, .. } => match field {
                EducationField::Institution => ("Name of the institution", "Название учебного заведения"),
                EducationField::Degree => (
                    "e.g. Bachelor of Computer Science",
                    "Например: Бакалавр информатики",
                ),
                EducationField::Description => (
                    "Additional information about your education",
                    "Дополнительная информация о вашем образовании",
                ),
                _ => ("", ""),
            },
            SkillName { .. } => ("e.g. JavaScript", "Например: JavaScript"),
            SkillLevel { .. } => ("", ""),
        };
        pick(locale, en, ru)
    }

    /// Current bound value; `None` once the entry is gone
    pub fn value(&self, data: &ResumeData) -> Option<FieldValue> {
        match self {
            FieldTarget::Profile { field } => Some(data.profile.get(*field).into()),
            FieldTarget::Experience { id, field } => {
                data.experience_entry(*id).map(|e| e.get(*field).into())
            }
            FieldTarget::Education { id, field } => {
                data.education_entry(*id).map(|e| e.get(*field).into())
            }
            FieldTarget::SkillName { id } => data.skill(*id).map(|s| s.name.as_str().into()),
            FieldTarget::SkillLevel { id } => data.skill(*id).map(|s| s.level.into()),
        }
    }

    /// Turn raw input into the store action for this field.
    ///
    /// Text fields take any string. The level slider parses and clamps.
    pub fn action(&self, raw: &str) -> Result<Action> {
        Ok(match self {
            FieldTarget::Profile { field } => Action::set_profile_field(*field, raw),
            FieldTarget::Experience { id, field } => Action::update_entry_field(
                *id,
                EntryUpdate::Experience {
                    field: *field,
                    value: raw.to_string(),
                },
            ),
            FieldTarget::Education { id, field } => Action::update_entry_field(
                *id,
                EntryUpdate::Education {
                    field: *field,
                    value: raw.to_string(),
                },
            ),
            FieldTarget::SkillName { id } => Action::update_entry_field(
                *id,
                EntryUpdate::SkillName {
                    value: raw.to_string(),
                },
            ),
            FieldTarget::SkillLevel { id } => Action::update_entry_field(
                *id,
                EntryUpdate::SkillLevel {
                    value: RangeControl::SKILL_LEVEL.accept(raw)?,
                },
            ),
        })
    }
}

fn pick(locale: DisplayLocale, en: &'static str, ru: &'static str) -> &'static str {
    match locale {
        DisplayLocale::En => en,
        DisplayLocale::Ru => ru,
    }
}
