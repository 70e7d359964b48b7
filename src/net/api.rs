//! REST endpoint helpers for the attendance backend.
//!
//! Thin typed wrappers over [`crate::net::http`]; every call inherits the
//! bearer credential and the 401 session policy from the transport, the
//! login call included.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use super::http::{self, ApiError, Method};
use super::types::{AnnualLeaveSummary, Employee, LeaveRecord, LoginResponse, NewLeaveRequest, RecordPage};
use crate::state::session::Session;

/// Filters and paging for the leave-record search. Empty strings mean
/// "no filter" and are omitted from the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordQuery {
    pub english_name: String,
    /// Leave category label, e.g. `SICK`.
    pub kind: String,
    /// ISO local date-time lower bound.
    pub start: String,
    /// ISO local date-time upper bound.
    pub end: String,
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            english_name: String::new(),
            kind: String::new(),
            start: String::new(),
            end: String::new(),
            page: 0,
            size: 10,
        }
    }
}

/// Percent-encode a query value: every UTF-8 byte outside the RFC 3986
/// unreserved set becomes `%XX`. The name filter is free text, so `&`, `#`,
/// `+`, and `%` must not reach the query string raw.
fn encode_query_value(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                encoded.push('%');
                encoded.push(char::from(HEX[usize::from(byte >> 4)]));
                encoded.push(char::from(HEX[usize::from(byte & 0x0f)]));
            }
        }
    }
    encoded
}

/// Query string for the record search, paging always present.
fn records_query_string(query: &RecordQuery) -> String {
    let mut params = Vec::new();
    if !query.english_name.is_empty() {
        params.push(format!("englishName={}", encode_query_value(&query.english_name)));
    }
    if !query.kind.is_empty() {
        params.push(format!("type={}", encode_query_value(&query.kind)));
    }
    if !query.start.is_empty() {
        params.push(format!("start={}", encode_query_value(&query.start)));
    }
    if !query.end.is_empty() {
        params.push(format!("end={}", encode_query_value(&query.end)));
    }
    params.push(format!("page={}", query.page));
    params.push(format!("size={}", query.size));
    format!("?{}", params.join("&"))
}

fn annual_leave_endpoint(employee_id: i64) -> String {
    format!("/api/employees/{employee_id}/annual-leave")
}

fn record_endpoint(id: i64) -> String {
    format!("/api/leave-requests/{id}")
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Any non-2xx status reads as a failed login; the caller decides how to
/// surface it.
pub async fn login(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let payload = serde_json::json!({ "username": username, "password": password });
    http::request_json(session, Method::Post, "/api/auth/login", Some(&payload)).await
}

/// List all employees via `GET /api/employees`.
///
/// # Errors
///
/// Returns the transport or status error from the request.
pub async fn fetch_employees(session: RwSignal<Session>) -> Result<Vec<Employee>, ApiError> {
    http::request_json(session, Method::Get, "/api/employees", None).await
}

/// Fetch one employee's annual-leave summary.
///
/// # Errors
///
/// Returns the transport or status error from the request.
pub async fn fetch_annual_leave(
    session: RwSignal<Session>,
    employee_id: i64,
) -> Result<AnnualLeaveSummary, ApiError> {
    http::request_json(session, Method::Get, &annual_leave_endpoint(employee_id), None).await
}

/// Search leave records via `GET /api/leave-requests`.
///
/// # Errors
///
/// Returns the transport or status error from the request.
pub async fn fetch_leave_records(
    session: RwSignal<Session>,
    query: &RecordQuery,
) -> Result<RecordPage, ApiError> {
    let path = format!("/api/leave-requests{}", records_query_string(query));
    http::request_json(session, Method::Get, &path, None).await
}

/// Create a leave request via `POST /api/leave-requests`.
///
/// # Errors
///
/// Returns the transport or status error from the request.
pub async fn create_leave_request(
    session: RwSignal<Session>,
    request: &NewLeaveRequest,
) -> Result<LeaveRecord, ApiError> {
    let payload =
        serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    http::request_json(session, Method::Post, "/api/leave-requests", Some(&payload)).await
}

/// Delete a leave record via `DELETE /api/leave-requests/{id}`. Admin only
/// on the backend side; callers gate the UI with `Session::is_admin`.
///
/// # Errors
///
/// Returns the transport or status error from the request.
pub async fn delete_leave_record(session: RwSignal<Session>, id: i64) -> Result<(), ApiError> {
    http::request_unit(session, Method::Delete, &record_endpoint(id)).await
}
