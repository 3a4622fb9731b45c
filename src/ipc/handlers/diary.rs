use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::series::{self, SeriesConfig, SubjectMeeting};
use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

struct HandlerErr {
    code: &'static str,
    message: String,
    details: Option<serde_json::Value>,
}

impl HandlerErr {
    fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

fn bad_params(message: impl Into<String>) -> HandlerErr {
    HandlerErr {
        code: "bad_params",
        message: message.into(),
        details: None,
    }
}

fn parse_optional_date(
    params: &serde_json::Value,
    key: &str,
    default: NaiveDate,
) -> Result<NaiveDate, HandlerErr> {
    let Some(v) = params.get(key) else {
        return Ok(default);
    };
    if v.is_null() {
        return Ok(default);
    }
    let Some(s) = v.as_str() else {
        return Err(bad_params(format!("{} must be a YYYY-MM-DD string", key)));
    };
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| bad_params(format!("{} must be a YYYY-MM-DD string", key)))
}

fn parse_optional_subjects(
    params: &serde_json::Value,
    default: &[SubjectMeeting],
) -> Result<Vec<SubjectMeeting>, HandlerErr> {
    let Some(v) = params.get("subjects") else {
        return Ok(default.to_vec());
    };
    if v.is_null() {
        return Ok(default.to_vec());
    }
    let Some(items) = v.as_array() else {
        return Err(bad_params("subjects must be an array"));
    };
    let mut subjects = Vec::with_capacity(items.len());
    for item in items {
        let name = item
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| bad_params("subjects[].name must be a string"))?;
        let index = item
            .get("weekday")
            .and_then(|w| w.as_u64())
            .ok_or_else(|| bad_params("subjects[].weekday must be a number"))?;
        let weekday = u8::try_from(index)
            .ok()
            .and_then(series::weekday_from_sunday_index)
            .ok_or_else(|| {
                bad_params("subjects[].weekday must be 0 (Sunday) through 6 (Saturday)")
            })?;
        subjects.push(SubjectMeeting {
            name: name.to_string(),
            weekday,
        });
    }
    Ok(subjects)
}

fn diary_semester_open(
    state: &AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let window = state.portal.semester;
    let range_start = parse_optional_date(params, "rangeStart", window.start)?;
    let range_end = parse_optional_date(params, "rangeEnd", window.end)?;
    let today = parse_optional_date(params, "today", window.today)?;
    let subjects = parse_optional_subjects(params, &state.portal.subjects)?;

    let seed = match params.get("seed") {
        None => None,
        Some(v) if v.is_null() => None,
        Some(v) => Some(
            v.as_u64()
                .ok_or_else(|| bad_params("seed must be an unsigned integer"))?,
        ),
    };
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    };

    let cfg = SeriesConfig::default();
    let generated = series::generate(&subjects, range_start, range_end, today, &cfg, &mut rng);

    Ok(json!({
        "rangeStart": range_start,
        "rangeEnd": range_end,
        "today": today,
        "subjects": generated,
    }))
}

fn handle_diary_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let portal = &state.portal;
    ok(
        &req.id,
        json!({
            "averageGrade": portal.average_grade(),
            "entries": portal.grades,
        }),
    )
}

fn handle_diary_semester_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    match diary_semester_open(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "diary.open" => Some(handle_diary_open(state, req)),
        "diary.semesterOpen" => Some(handle_diary_semester_open(state, req)),
        _ => None,
    }
}
