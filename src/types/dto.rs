// src/types/dto.rs
//! Gateway-owned entities. The gateway speaks camelCase JSON; these are
//! deserialized verbatim and rendered without client-side validation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub job_id: i32,
    pub candidate_name: String,
    pub candidate_email: String,
    pub screening_score: i32,
    pub screening_feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub slot_id: String,
    pub time: String,
    pub booked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: i32,
    pub slot_id: String,
    pub time: String,
}

/// Result of `GET /screening?email=`. A candidate without a stored result
/// comes back with score 0 and feedback "No screening result available".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub email: String,
    pub score: i32,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserializes_gateway_json() {
        let json = r#"{
            "candidateName": "Ada Lovelace",
            "candidateEmail": "ada@example.com",
            "jobId": 3,
            "screeningScore": 87,
            "screeningFeedback": "Strong candidate"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.job_id, 3);
        assert_eq!(app.candidate_name, "Ada Lovelace");
        assert_eq!(app.screening_score, 87);
    }

    #[test]
    fn test_slot_carries_booked_flag() {
        let json = r#"{"slotId": "a1", "time": "2026-08-08 09:00", "booked": true}"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert!(slot.booked);
        assert_eq!(slot.slot_id, "a1");
    }
}
