//! Sample data loaded at startup

use crate::{EducationEntry, EntryId, ExperienceEntry, Profile, ResumeData, SkillEntry};
use std::sync::Arc;

/// The resume shown when the application starts
pub fn sample_resume() -> ResumeData {
    ResumeData {
        profile: Arc::new(Profile {
            full_name: "Дмитрий Дмитриевич".to_string(),
            position: "Frontend Разработчик".to_string(),
            email: "dima@example.com".to_string(),
            phone: "+3 334 123-45".to_string(),
            location: "Москва, Россия".to_string(),
            about: "Опытный frontend разработчик с более чем 5-летним стажем работы. \
                    Специализируюсь на создании отзывчивых и интуитивно понятных \
                    пользовательских интерфейсов с использованием современных \
                    JavaScript-фреймворков."
                .to_string(),
        }),
        experience: Arc::new(vec![
            ExperienceEntry {
                id: EntryId::new(1),
                company: "ООО \"Техно\"".to_string(),
                position: "Старший Frontend Разработчик".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2023-05".to_string(),
                description: "Разработка и поддержка корпоративного веб-приложения. \
                              Внедрение React и TypeScript. Оптимизация производительности \
                              и улучшение UX/UI."
                    .to_string(),
            },
            ExperienceEntry {
                id: EntryId::new(2),
                company: "ООО \"Софт\"".to_string(),
                position: "Frontend Разработчик".to_string(),
                start_date: "2018-03".to_string(),
                end_date: "2019-12".to_string(),
                description: "Создание интерактивных веб-интерфейсов для клиентских проектов. \
                              Работа с Vue.js и Webpack."
                    .to_string(),
            },
        ]),
        education: Arc::new(vec![EducationEntry {
            id: EntryId::new(1),
            institution: "Московский Государственный Университет".to_string(),
            degree: "Магистр компьютерных наук".to_string(),
            start_date: "2016-09".to_string(),
            end_date: "2018-06".to_string(),
            description: "Специализация в области веб-разработки и информационных систем."
                .to_string(),
        }]),
        skills: Arc::new(
            [
                ("React", 90),
                ("JavaScript", 85),
                ("TypeScript", 85),
                ("HTML/CSS", 75),
                ("Node.js", 70),
                ("Git", 0),
            ]
            .into_iter()
            .zip(1..)
            .map(|((name, level), id)| SkillEntry {
                id: EntryId::new(id),
                name: name.to_string(),
                level,
            })
            .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Section;

    #[test]
    fn test_sample_ids_are_sequential() {
        let resume = sample_resume();
        assert_eq!(
            resume.ids(Section::Skills),
            (1..=6).map(EntryId::new).collect::<Vec<_>>()
        );
        assert_eq!(resume.len(Section::Experience), 2);
        assert_eq!(resume.len(Section::Education), 1);
    }

    #[test]
    fn test_sample_is_seeded_in_russian() {
        let resume = sample_resume();
        assert_eq!(resume.profile.full_name, "Дмитрий Дмитриевич");
        assert_eq!(resume.experience[0].company, "ООО \"Техно\"");
        assert_eq!(resume.skills[5].level, 0);
    }
}
