//! Static route table and route-metadata helpers.
//!
//! DESIGN
//! ======
//! Leptos route components carry no metadata, so titles live in this table
//! keyed by path. `app.rs` declares the matching `<Route>` tree and the
//! navigation guard resolves the current pathname here on every transition.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos_router::{PartialPathMatch, PathSegment, PossibleRouteMatch, StaticSegment};

/// Site name, used alone when a route has no title.
pub const APP_TITLE: &str = "OnceHuman工具集";

/// Named views of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Tools,
    AffixProbability,
    StrengthenProbability,
    About,
    NotFound,
}

/// Static per-route data read by the navigation guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    /// Absolute path; `"*"` for the catch-all.
    pub path: &'static str,
    pub meta: RouteMeta,
}

const fn titled(name: RouteName, path: &'static str, title: &'static str) -> RouteDef {
    RouteDef { name, path, meta: RouteMeta { title: Some(title) } }
}

/// Catch-all entry for unmatched paths.
pub const NOT_FOUND: RouteDef = titled(RouteName::NotFound, "*", "页面未找到");

/// Every concrete route, in declaration order. Nested tool routes sit under `/tools`.
pub const ROUTES: &[RouteDef] = &[
    titled(RouteName::Home, "/", "首页"),
    RouteDef { name: RouteName::Tools, path: "/tools", meta: RouteMeta { title: None } },
    titled(RouteName::AffixProbability, "/tools/affix-probability", "模组词条概率计算器"),
    titled(RouteName::StrengthenProbability, "/tools/strengthen-probability", "模组强化概率计算器"),
    titled(RouteName::About, "/about", "关于"),
];

impl RouteName {
    /// Path of the named route; `None` for the catch-all.
    pub fn path(self) -> Option<&'static str> {
        ROUTES.iter().find(|def| def.name == self).map(|def| def.path)
    }
}

/// Strip query, fragment, and trailing slashes (except for the root).
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Route table entry for `path`, falling back to [`NOT_FOUND`]. Matching
/// ignores ASCII case, like [`Segment`].
pub fn resolve(path: &str) -> &'static RouteDef {
    let path = normalize_path(path);
    ROUTES.iter().find(|def| def.path.eq_ignore_ascii_case(path)).unwrap_or(&NOT_FOUND)
}

/// Static path segment that matches regardless of ASCII case, so `/Tools`
/// renders the same view as `/tools`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment(pub &'static str);

impl PossibleRouteMatch for Segment {
    fn optional(&self) -> bool {
        false
    }

    fn test<'a>(&self, path: &'a str) -> Option<PartialPathMatch<'a>> {
        if self.0.is_empty() {
            return StaticSegment("").test(path);
        }
        let rest = path.strip_prefix('/')?;
        let head = rest.get(..self.0.len())?;
        if !head.eq_ignore_ascii_case(self.0) {
            return None;
        }
        // Must end on a segment boundary: `/toolsx` is not `/tools`.
        if !rest[self.0.len()..].is_empty() && !rest[self.0.len()..].starts_with('/') {
            return None;
        }
        let (matched, remaining) = path.split_at(self.0.len() + 1);
        Some(PartialPathMatch::new(remaining, vec![], matched))
    }

    fn generate_path(&self, path: &mut Vec<PathSegment>) {
        StaticSegment(self.0).generate_path(path);
    }
}

/// Document title for a route's metadata.
pub fn document_title(meta: &RouteMeta) -> String {
    match meta.title {
        Some(title) => format!("{title} - {APP_TITLE}"),
        None => APP_TITLE.to_owned(),
    }
}

/// Document title for the route `path` resolves to.
pub fn title_for_path(path: &str) -> String {
    document_title(&resolve(path).meta)
}
