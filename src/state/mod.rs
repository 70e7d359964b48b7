//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the single source of truth for authentication: the route
//! guard and the HTTP layer both read it, and only the HTTP layer's 401
//! policy mutates it besides the login/logout operations themselves.

pub mod session;
