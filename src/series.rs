use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use serde::Serialize;

/// Recorded result for one scheduled occurrence of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    /// Meeting not graded (not yet marked, cancelled, or in the future).
    Blank,
    Grade(u8),
    Absence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingOutcome {
    pub date: NaiveDate,
    pub mark: Mark,
}

/// Generator input: a subject and the weekday it meets on.
#[derive(Debug, Clone)]
pub struct SubjectMeeting {
    pub name: String,
    pub weekday: Weekday,
}

/// Chronological outcomes for one subject over a date range, plus the
/// two-decimal average over graded entries only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSeries {
    pub subject: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    pub outcomes: Vec<MeetingOutcome>,
    pub average: String,
}

/// Tunable presentation constants of the generator. The defaults reproduce
/// the portal's observed behavior: half the past meetings stay blank, every
/// third subject may pick up a single absence at 15% per chance, and grades
/// 4 and 5 carry double the weight of 3.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    pub blank_threshold: f64,
    pub absence_threshold: f64,
    pub grade_pool: Vec<u8>,
    /// Subjects at positions where `(index + 1) % absence_stride == 0` are
    /// absence-prone; 0 disables absences entirely.
    pub absence_stride: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            blank_threshold: 0.5,
            absence_threshold: 0.15,
            grade_pool: vec![3, 4, 4, 5, 5],
            absence_stride: 3,
        }
    }
}

/// Inclusive calendar-date range. Finite, restartable via `Clone`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

pub fn date_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: if start <= end { Some(start) } else { None },
        end,
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = match current.succ_opt() {
            Some(d) if d <= self.end => Some(d),
            _ => None,
        };
        Some(current)
    }
}

pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Build the full set of subject series for one semester window.
///
/// Walks every occurrence of each subject's weekday between `range_start`
/// and `range_end` inclusive. Meetings up to `today` are assigned randomly
/// (blank / grade / at most one absence for absence-prone subjects);
/// meetings after `today` are always blank. A reversed range yields empty
/// series. Every call regenerates from scratch; pass a seeded RNG for
/// reproducible output.
pub fn generate<R: Rng>(
    subjects: &[SubjectMeeting],
    range_start: NaiveDate,
    range_end: NaiveDate,
    today: NaiveDate,
    cfg: &SeriesConfig,
    rng: &mut R,
) -> Vec<SubjectSeries> {
    subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| generate_subject(index, subject, range_start, range_end, today, cfg, rng))
        .collect()
}

fn generate_subject<R: Rng>(
    index: usize,
    subject: &SubjectMeeting,
    range_start: NaiveDate,
    range_end: NaiveDate,
    today: NaiveDate,
    cfg: &SeriesConfig,
    rng: &mut R,
) -> SubjectSeries {
    let absence_prone = cfg.absence_stride > 0 && (index + 1) % cfg.absence_stride == 0;
    let mut absence_used = false;
    let mut outcomes: Vec<MeetingOutcome> = Vec::new();

    for date in date_range(range_start, range_end).filter(|d| d.weekday() == subject.weekday) {
        let mark = if date > today {
            Mark::Blank
        } else if rng.random::<f64>() < cfg.blank_threshold {
            Mark::Blank
        } else if absence_prone && !absence_used && rng.random::<f64>() < cfg.absence_threshold {
            absence_used = true;
            Mark::Absence
        } else if cfg.grade_pool.is_empty() {
            Mark::Blank
        } else {
            Mark::Grade(cfg.grade_pool[rng.random_range(0..cfg.grade_pool.len())])
        };
        outcomes.push(MeetingOutcome { date, mark });
    }

    SubjectSeries {
        subject: subject.name.clone(),
        weekday: subject.weekday.num_days_from_sunday() as u8,
        average: average_of(&outcomes),
        outcomes,
    }
}

/// Two-decimal average over graded outcomes only; blanks and absences count
/// toward neither numerator nor denominator. `"0.00"` when nothing is graded.
pub fn average_of(outcomes: &[MeetingOutcome]) -> String {
    let mut sum: u32 = 0;
    let mut count: u32 = 0;
    for outcome in outcomes {
        if let Mark::Grade(value) = outcome.mark {
            sum += u32::from(value);
            count += 1;
        }
    }
    if count == 0 {
        "0.00".to_string()
    } else {
        two_decimals(f64::from(sum) / f64::from(count))
    }
}

/// `{:.2}` formatting: ties round to even on the decimal expansion.
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
