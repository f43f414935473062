//! Route definitions and the immutable route table.
//!
//! # Responsibilities
//! - Declare path → component mappings with unique names
//! - Enforce uniqueness invariants at build time
//! - Resolve a normalized path to its definition, or an explicit no-match
//!
//! # Design Decisions
//! - The table is compiled once at startup and immutable afterwards
//! - Resolution is deterministic: same path always yields the same route
//! - Trailing slashes are insignificant ("/game/" matches "/game")
//! - No-match is explicit; an optional not-found view makes the fallback
//!   a deliberate choice instead of framework default behavior

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::routing::types::{RouteId, TableError, TableResult};
use crate::view::{ComponentSource, View, ViewLoader};

/// A declared mapping from a URL path to a named view component.
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// URL path pattern (absolute, e.g. "/game").
    pub path: String,

    /// Unique route identifier, used in logs and history entries.
    pub name: String,

    /// How the route obtains its view.
    pub source: ComponentSource,
}

impl RouteDef {
    /// Route whose view is bound at construction time.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: Arc<dyn View>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            source: ComponentSource::Eager(view),
        }
    }

    /// Route whose view is fetched on first navigation.
    pub fn lazy(
        path: impl Into<String>,
        name: impl Into<String>,
        loader: Arc<dyn ViewLoader>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            source: ComponentSource::Lazy(loader),
        }
    }
}

/// Strip insignificant trailing slashes. The root path stays "/".
pub(crate) fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Ordered builder for a [`RouteTable`].
#[derive(Default)]
pub struct RouteTableBuilder {
    routes: Vec<RouteDef>,
    not_found: Option<Arc<dyn View>>,
    load_failure: Option<Arc<dyn View>>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route definition. Order is preserved.
    pub fn route(mut self, def: RouteDef) -> Self {
        self.routes.push(def);
        self
    }

    /// View served when no route matches the navigation target.
    pub fn not_found_view(mut self, view: Arc<dyn View>) -> Self {
        self.not_found = Some(view);
        self
    }

    /// View served when a deferred load fails.
    pub fn load_failure_view(mut self, view: Arc<dyn View>) -> Self {
        self.load_failure = Some(view);
        self
    }

    /// Compile the table, enforcing path and name uniqueness.
    pub fn build(self) -> TableResult<RouteTable> {
        if self.routes.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen_paths = HashSet::new();
        let mut name_index = HashMap::new();
        let mut path_index = matchit::Router::new();

        for (idx, def) in self.routes.iter().enumerate() {
            let id = RouteId(idx);
            let normalized = normalize_path(&def.path).to_string();

            if !seen_paths.insert(normalized.clone()) {
                return Err(TableError::DuplicatePath {
                    path: def.path.clone(),
                });
            }
            if name_index.insert(def.name.clone(), id).is_some() {
                return Err(TableError::DuplicateName {
                    name: def.name.clone(),
                });
            }
            path_index
                .insert(normalized, id)
                .map_err(|e| TableError::InvalidPath {
                    path: def.path.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(RouteTable {
            routes: self.routes,
            name_index,
            path_index,
            not_found: self.not_found,
            load_failure: self.load_failure,
        })
    }
}

/// Immutable path → route mapping, compiled once at startup.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    name_index: HashMap<String, RouteId>,
    path_index: matchit::Router<RouteId>,
    not_found: Option<Arc<dyn View>>,
    load_failure: Option<Arc<dyn View>>,
}

impl RouteTable {
    /// Resolve a normalized in-app path to its route, if any.
    pub fn resolve(&self, path: &str) -> Option<(RouteId, &RouteDef)> {
        let id = *self.path_index.at(normalize_path(path)).ok()?.value;
        Some((id, &self.routes[id.0]))
    }

    /// Look up a route by its unique name.
    pub fn by_name(&self, name: &str) -> Option<(RouteId, &RouteDef)> {
        let id = *self.name_index.get(name)?;
        Some((id, &self.routes[id.0]))
    }

    /// Route definition for a known id.
    pub fn get(&self, id: RouteId) -> &RouteDef {
        &self.routes[id.0]
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Declared route names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    /// Configured fallback for unmatched paths.
    pub fn not_found_view(&self) -> Option<&Arc<dyn View>> {
        self.not_found.as_ref()
    }

    /// Configured fallback for failed deferred loads.
    pub fn load_failure_view(&self) -> Option<&Arc<dyn View>> {
        self.load_failure.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::StaticView;

    fn view(name: &'static str) -> Arc<dyn View> {
        Arc::new(StaticView::new(name, ""))
    }

    fn two_route_table() -> RouteTable {
        RouteTableBuilder::new()
            .route(RouteDef::eager("/", "home", view("Game")))
            .route(RouteDef::eager("/game", "game", view("Game")))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolution() {
        let table = two_route_table();

        let (_, home) = table.resolve("/").unwrap();
        assert_eq!(home.name, "home");

        let (_, game) = table.resolve("/game").unwrap();
        assert_eq!(game.name, "game");

        assert!(table.resolve("/missing").is_none());
    }

    #[test]
    fn test_trailing_slash_insensitive() {
        let table = two_route_table();
        let (_, game) = table.resolve("/game/").unwrap();
        assert_eq!(game.name, "game");
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTableBuilder::new()
            .route(RouteDef::eager("/game", "game", view("Game")))
            .route(RouteDef::eager("/game/", "game2", view("Game")))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicatePath { .. }));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTableBuilder::new()
            .route(RouteDef::eager("/", "home", view("Game")))
            .route(RouteDef::eager("/game", "home", view("Game")))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateName { .. }));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            RouteTableBuilder::new().build().unwrap_err(),
            TableError::Empty
        ));
    }

    #[test]
    fn test_by_name() {
        let table = two_route_table();
        let (id, def) = table.by_name("game").unwrap();
        assert_eq!(def.path, "/game");
        assert_eq!(table.get(id).name, "game");
        assert!(table.by_name("about").is_none());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/game/"), "/game");
        assert_eq!(normalize_path("/game"), "/game");
    }
}
