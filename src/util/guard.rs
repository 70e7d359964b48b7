//! Navigation guard evaluated against the route table and session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page and the dashboard shell both call [`install`]; between
//! them every route in the table is covered, so each transition gets one
//! evaluation of the decision table. The guard only reads the session —
//! clearing it on authorization failure belongs to the HTTP layer.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{self, RouteDef};
use crate::state::session::Session;

/// Outcome of guarding one navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed unmodified.
    Allow,
    /// Abort and go to the login route.
    ToLogin,
    /// Abort and go to the authenticated landing route.
    ToLanding,
}

/// Ordered decision table, first match wins:
///
/// 1. any definition in the chain requires auth and the session is not
///    authenticated → login;
/// 2. the target is the login route and the session is authenticated →
///    landing;
/// 3. otherwise allow.
///
/// An empty (unmatched) chain always allows; the router fallback owns it.
pub fn decide(chain: &[&RouteDef], session: &Session) -> GuardDecision {
    if chain.iter().any(|def| def.requires_auth) && !session.is_authenticated() {
        return GuardDecision::ToLogin;
    }
    if chain.last().and_then(|def| def.name) == Some(routes::LOGIN) && session.is_authenticated() {
        return GuardDecision::ToLanding;
    }
    GuardDecision::Allow
}

/// Re-evaluate the decision table whenever the location or session changes,
/// navigating on redirect decisions.
pub fn install(session: RwSignal<Session>) {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        let chain = routes::match_chain(&path);
        let target = match decide(&chain, &session.get()) {
            GuardDecision::Allow => None,
            GuardDecision::ToLogin => routes::path_to(routes::LOGIN),
            GuardDecision::ToLanding => routes::path_to(routes::LANDING),
        };
        if let Some(target) = target {
            navigate(&target, NavigateOptions::default());
        }
    });
}
