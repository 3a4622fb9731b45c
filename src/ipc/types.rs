use serde::Deserialize;

use crate::data::{Application, PortalData};

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub portal: PortalData,
    /// Process-lifetime only; rebuilt on restart like everything else.
    pub applications: Vec<Application>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            portal: PortalData::sample(),
            applications: PortalData::sample_applications(),
        }
    }
}
