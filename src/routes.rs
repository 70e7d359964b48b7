//! Static route table for the application.
//!
//! DESIGN
//! ======
//! One immutable tree, built at compile time and mirrored by the `Routes`
//! declaration in `app`. The guard consumes the matched chain of
//! definitions, so `requires_auth` on the dashboard shell covers every leaf
//! beneath it without per-leaf flags.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Name of the login route.
pub const LOGIN: &str = "login";

/// Name of the default authenticated landing route, the first leaf under
/// the dashboard shell.
pub const LANDING: &str = "annual-leave";

/// One route definition. `path` is a single segment; the empty segment
/// denotes a pathless shell or an index leaf.
#[derive(Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub requires_auth: bool,
    pub children: &'static [RouteDef],
}

/// The application route tree: a login leaf plus an authenticated dashboard
/// shell whose index leaf forwards to the landing route.
pub const ROUTE_TABLE: &[RouteDef] = &[
    RouteDef {
        path: "login",
        name: Some(LOGIN),
        requires_auth: false,
        children: &[],
    },
    RouteDef {
        path: "",
        name: None,
        requires_auth: true,
        children: &[
            RouteDef {
                path: "",
                name: None,
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "annual-leave",
                name: Some(LANDING),
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "leave-records",
                name: Some("leave-records"),
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "create-leave",
                name: Some("create-leave"),
                requires_auth: false,
                children: &[],
            },
        ],
    },
];

/// The chain of definitions matched by a location path, outermost first.
/// Empty when nothing matches; the router's fallback owns that case.
pub fn match_chain(path: &str) -> Vec<&'static RouteDef> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut chain = Vec::new();
    if match_level(ROUTE_TABLE, &segments, &mut chain) {
        chain
    } else {
        Vec::new()
    }
}

fn match_level(
    defs: &'static [RouteDef],
    segments: &[&str],
    chain: &mut Vec<&'static RouteDef>,
) -> bool {
    for def in defs {
        let rest = if def.path.is_empty() {
            segments
        } else if segments.first() == Some(&def.path) {
            &segments[1..]
        } else {
            continue;
        };
        chain.push(def);
        if def.children.is_empty() {
            if rest.is_empty() {
                return true;
            }
        } else if match_level(def.children, rest, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// Absolute path for a named route, if the name exists in the table.
pub fn path_to(name: &str) -> Option<String> {
    let mut segments = Vec::new();
    if find_path(ROUTE_TABLE, name, &mut segments) {
        Some(format!("/{}", segments.join("/")))
    } else {
        None
    }
}

fn find_path(defs: &'static [RouteDef], name: &str, segments: &mut Vec<&'static str>) -> bool {
    for def in defs {
        if !def.path.is_empty() {
            segments.push(def.path);
        }
        if def.name == Some(name) {
            return true;
        }
        if find_path(def.children, name, segments) {
            return true;
        }
        if !def.path.is_empty() {
            segments.pop();
        }
    }
    false
}
