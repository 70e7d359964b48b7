//! Wire DTOs for the attendance REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Date and date-time values travel as the backend's ISO strings;
//! the client renders them but never does calendar arithmetic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful login payload from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token presented on subsequent requests.
    pub token: String,
    /// Role label, e.g. `ADMIN`.
    pub role: String,
}

/// An employee record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub chinese_name: String,
    pub english_name: String,
    /// ISO `yyyy-mm-dd` hire date.
    pub hire_date: String,
}

/// Annual-leave quota summary for one employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualLeaveSummary {
    pub total_quota_days: f64,
    pub used_days: f64,
    pub remaining_days: f64,
}

/// A recorded leave request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: i64,
    pub employee_id: i64,
    pub english_name: String,
    /// ISO local date-time, e.g. `2026-03-02T09:00:00`.
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    /// Leave category label (`type` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
}

/// One page of leave records from the search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub content: Vec<LeaveRecord>,
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
    pub total_elements: i64,
}

/// Payload for creating a leave request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub english_name: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Leave category labels accepted by the backend.
pub const LEAVE_KINDS: &[&str] = &["ANNUAL", "SICK", "PERSONAL", "MARRIAGE", "MATERNITY", "OTHER"];
