use super::*;

fn names(chain: &[&RouteDef]) -> Vec<Option<&'static str>> {
    chain.iter().map(|def| def.name).collect()
}

// =============================================================
// Path matching
// =============================================================

#[test]
fn login_matches_as_a_single_leaf() {
    let chain = match_chain("/login");
    assert_eq!(names(&chain), vec![Some(LOGIN)]);
    assert!(!chain.iter().any(|def| def.requires_auth));
}

#[test]
fn root_matches_shell_and_index_leaf() {
    let chain = match_chain("/");
    assert_eq!(chain.len(), 2);
    assert!(chain[0].requires_auth);
    assert!(chain[1].path.is_empty());
}

#[test]
fn leaf_chain_inherits_shell_auth_flag() {
    for path in ["/annual-leave", "/leave-records", "/create-leave"] {
        let chain = match_chain(path);
        assert_eq!(chain.len(), 2, "chain for {path}");
        assert!(chain.iter().any(|def| def.requires_auth), "auth for {path}");
    }
}

#[test]
fn unknown_path_matches_nothing() {
    assert!(match_chain("/nope").is_empty());
    assert!(match_chain("/annual-leave/extra").is_empty());
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(names(&match_chain("/login/")), vec![Some(LOGIN)]);
}

// =============================================================
// Name resolution
// =============================================================

#[test]
fn named_routes_resolve_to_absolute_paths() {
    assert_eq!(path_to(LOGIN).as_deref(), Some("/login"));
    assert_eq!(path_to(LANDING).as_deref(), Some("/annual-leave"));
    assert_eq!(path_to("leave-records").as_deref(), Some("/leave-records"));
}

#[test]
fn unknown_name_resolves_to_none() {
    assert_eq!(path_to("payroll"), None);
}
