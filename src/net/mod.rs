//! Network layer: REST transport, endpoint helpers, and wire DTOs.
//!
//! ARCHITECTURE
//! ============
//! `http` is the single transport; every endpoint helper in `api` goes
//! through it, so bearer authorization and the 401 session policy apply
//! uniformly regardless of which feature issued the request.

pub mod api;
pub mod http;
pub mod types;
