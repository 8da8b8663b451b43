use serde::{Deserialize, Serialize};

// ===== Gateway Response Envelopes =====

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreateResponse {
    pub success: bool,
    pub job_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
}
