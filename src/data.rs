use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::series::{two_decimals, SubjectMeeting};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeEntry {
    pub subject: String,
    pub score: u8,
    /// Display form, DD.MM.YYYY.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub days: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub category: String,
    pub comment: String,
    pub submitted_at: NaiveDate,
    pub status: String,
}

/// Semester window the diary generator runs over by default.
#[derive(Debug, Clone, Copy)]
pub struct SemesterWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
}

/// All sample datasets served by the sidecar. Rebuilt fresh on every
/// process start; nothing is persisted.
#[derive(Debug, Clone)]
pub struct PortalData {
    pub groups: Vec<String>,
    pub grades: Vec<GradeEntry>,
    pub schedule: Vec<Lesson>,
    pub schedule_date: String,
    pub contacts: ContactInfo,
    pub opening_hours: Vec<OpeningHours>,
    pub dean_office: String,
    pub subjects: Vec<SubjectMeeting>,
    pub semester: SemesterWindow,
    pub application_categories: Vec<String>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn grade(subject: &str, score: u8, date: &str, kind: &str) -> GradeEntry {
    GradeEntry {
        subject: subject.to_string(),
        score,
        date: date.to_string(),
        kind: kind.to_string(),
    }
}

fn lesson(time: &str, subject: &str, teacher: &str, room: &str) -> Lesson {
    Lesson {
        time: time.to_string(),
        subject: subject.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
    }
}

fn subject(name: &str, weekday: Weekday) -> SubjectMeeting {
    SubjectMeeting {
        name: name.to_string(),
        weekday,
    }
}

impl PortalData {
    pub fn sample() -> Self {
        Self {
            groups: ["ИВТ-21", "ИВТ-22", "ПИ-21", "ПИ-22"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            grades: vec![
                grade("Математический анализ", 5, "15.10.2025", "Экзамен"),
                grade("Программирование", 4, "14.10.2025", "Лабораторная"),
                grade("Физика", 5, "13.10.2025", "Контрольная"),
                grade("Английский язык", 4, "12.10.2025", "Тест"),
                grade("История", 5, "11.10.2025", "Зачет"),
                grade("Алгоритмы", 5, "10.10.2025", "Лабораторная"),
            ],
            schedule: vec![
                lesson("9:00 - 10:30", "Математический анализ", "Иванов И.И.", "201"),
                lesson("10:45 - 12:15", "Программирование", "Петрова А.С.", "305"),
                lesson("12:30 - 14:00", "Физика", "Сидоров В.П.", "115"),
                lesson("14:15 - 15:45", "Английский язык", "Смирнова Е.А.", "402"),
            ],
            schedule_date: "Понедельник, 21 октября 2025".to_string(),
            contacts: ContactInfo {
                address: "г. Москва, ул. Примерная, д. 123".to_string(),
                phone: "+7 (495) 123-45-67".to_string(),
                email: "info@institute.edu".to_string(),
                website: "www.institute.edu".to_string(),
            },
            opening_hours: vec![
                OpeningHours {
                    days: "Понедельник - Пятница".to_string(),
                    time: "9:00 - 18:00".to_string(),
                },
                OpeningHours {
                    days: "Суббота".to_string(),
                    time: "10:00 - 15:00".to_string(),
                },
                OpeningHours {
                    days: "Воскресенье".to_string(),
                    time: "Выходной".to_string(),
                },
            ],
            dean_office: "Приём студентов: Пн, Ср, Пт с 14:00 до 17:00".to_string(),
            subjects: vec![
                subject("Математический анализ", Weekday::Mon),
                subject("Программирование", Weekday::Tue),
                subject("Физика", Weekday::Wed),
                subject("Английский язык", Weekday::Thu),
                subject("История", Weekday::Fri),
                subject("Алгоритмы", Weekday::Sat),
            ],
            semester: SemesterWindow {
                start: date(2025, 9, 1),
                end: date(2025, 12, 31),
                today: date(2025, 10, 21),
            },
            application_categories: [
                "Справка об обучении",
                "Академический отпуск",
                "Перевод на другое направление",
                "Материальная помощь",
                "Пересдача экзамена",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// Pre-seeded applications shown before the student submits anything.
    pub fn sample_applications() -> Vec<Application> {
        vec![
            Application {
                id: uuid::Uuid::new_v4().to_string(),
                category: "Справка об обучении".to_string(),
                comment: "Для предоставления по месту требования".to_string(),
                submitted_at: date(2025, 10, 2),
                status: "Готово".to_string(),
            },
            Application {
                id: uuid::Uuid::new_v4().to_string(),
                category: "Материальная помощь".to_string(),
                comment: String::new(),
                submitted_at: date(2025, 10, 15),
                status: "В обработке".to_string(),
            },
        ]
    }

    /// Dashboard average over the diary entries (all of them are numeric).
    pub fn average_grade(&self) -> String {
        if self.grades.is_empty() {
            return "0.00".to_string();
        }
        let sum: u32 = self.grades.iter().map(|g| u32::from(g.score)).sum();
        two_decimals(f64::from(sum) / self.grades.len() as f64)
    }
}
