use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

/// The three dashboard cards: semester average, diary entry count, lessons
/// scheduled today.
fn handle_dashboard_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let portal = &state.portal;
    ok(
        &req.id,
        json!({
            "averageGrade": portal.average_grade(),
            "gradeCount": portal.grades.len(),
            "lessonsToday": portal.schedule.len(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(handle_dashboard_open(state, req)),
        _ => None,
    }
}
