use super::*;
use crate::routes::match_chain;

fn signed_in() -> Session {
    Session {
        token: "T".to_owned(),
        role: "USER".to_owned(),
    }
}

#[test]
fn guarded_route_redirects_to_login_when_signed_out() {
    let chain = match_chain("/annual-leave");
    assert_eq!(decide(&chain, &Session::default()), GuardDecision::ToLogin);
}

#[test]
fn guarded_route_allows_when_signed_in() {
    let chain = match_chain("/leave-records");
    assert_eq!(decide(&chain, &signed_in()), GuardDecision::Allow);
}

#[test]
fn shell_index_is_guarded_through_inheritance() {
    let chain = match_chain("/");
    assert_eq!(decide(&chain, &Session::default()), GuardDecision::ToLogin);
    assert_eq!(decide(&chain, &signed_in()), GuardDecision::Allow);
}

#[test]
fn login_redirects_to_landing_when_signed_in() {
    let chain = match_chain("/login");
    assert_eq!(decide(&chain, &signed_in()), GuardDecision::ToLanding);
}

#[test]
fn login_allows_when_signed_out() {
    let chain = match_chain("/login");
    assert_eq!(decide(&chain, &Session::default()), GuardDecision::Allow);
}

#[test]
fn unauth_rule_wins_over_login_rule() {
    // A chain that both requires auth and targets login produces the first
    // rule's outcome for a signed-out session.
    let guarded_login = RouteDef {
        path: "login",
        name: Some(routes::LOGIN),
        requires_auth: true,
        children: &[],
    };
    let chain = [&guarded_login];
    assert_eq!(decide(&chain, &Session::default()), GuardDecision::ToLogin);
}

#[test]
fn unmatched_chain_always_allows() {
    let chain = match_chain("/nope");
    assert_eq!(decide(&chain, &Session::default()), GuardDecision::Allow);
    assert_eq!(decide(&chain, &signed_in()), GuardDecision::Allow);
}
