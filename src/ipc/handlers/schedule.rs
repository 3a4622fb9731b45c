use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_schedule_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let portal = &state.portal;
    let group = match req.params.get("group") {
        None => None,
        Some(v) if v.is_null() => None,
        Some(v) => match v.as_str() {
            Some(s) => Some(s.to_string()),
            None => return err(&req.id, "bad_params", "group must be a string", None),
        },
    };
    let group = match group {
        Some(g) => {
            if !portal.groups.iter().any(|known| known == &g) {
                return err(
                    &req.id,
                    "not_found",
                    format!("unknown group: {}", g),
                    Some(json!({ "groups": portal.groups })),
                );
            }
            g
        }
        // Default selection, as on the schedule tab.
        None => portal.groups.first().cloned().unwrap_or_default(),
    };

    ok(
        &req.id,
        json!({
            "group": group,
            "date": portal.schedule_date,
            "groups": portal.groups,
            "lessons": portal.schedule,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.open" => Some(handle_schedule_open(state, req)),
        _ => None,
    }
}
