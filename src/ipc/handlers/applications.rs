use crate::data::Application;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use chrono::Utc;
use serde_json::json;

fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| format!("missing {}", key))
}

fn handle_applications_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "categories": state.portal.application_categories,
            "applications": state.applications,
        }),
    )
}

fn handle_applications_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let category = match get_required_str(&req.params, "category") {
        Ok(v) => v,
        Err(message) => return err(&req.id, "bad_params", message, None),
    };
    if !state
        .portal
        .application_categories
        .iter()
        .any(|known| known == &category)
    {
        return err(
            &req.id,
            "bad_params",
            format!("unknown category: {}", category),
            Some(json!({ "categories": state.portal.application_categories })),
        );
    }
    let comment = match req.params.get("comment") {
        None => String::new(),
        Some(v) if v.is_null() => String::new(),
        Some(v) => match v.as_str() {
            Some(s) => s.to_string(),
            None => return err(&req.id, "bad_params", "comment must be a string", None),
        },
    };

    let application = Application {
        id: uuid::Uuid::new_v4().to_string(),
        category,
        comment,
        submitted_at: Utc::now().date_naive(),
        status: "На рассмотрении".to_string(),
    };
    state.applications.push(application.clone());
    ok(&req.id, json!({ "application": application }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "applications.list" => Some(handle_applications_list(state, req)),
        "applications.submit" => Some(handle_applications_submit(state, req)),
        _ => None,
    }
}
