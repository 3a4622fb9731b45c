use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_contacts_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let portal = &state.portal;
    ok(
        &req.id,
        json!({
            "address": portal.contacts.address,
            "phone": portal.contacts.phone,
            "email": portal.contacts.email,
            "website": portal.contacts.website,
            "hours": portal.opening_hours,
            "deanOffice": portal.dean_office,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "contacts.open" => Some(handle_contacts_open(state, req)),
        _ => None,
    }
}
