//! The ear-trainer route table.

use std::sync::Arc;

use crate::app::views::{load_failure_view, not_found_view, AboutLoader, GameView};
use crate::config::RouterConfig;
use crate::routing::{RouteDef, RouteTable, RouteTableBuilder, TableResult};
use crate::view::View;

/// Build the application's route table.
///
/// `/` (home) and `/game` both serve the game view eagerly. When
/// `routes.about_enabled` is set, `/about` is added with a lazily loaded
/// about view — the configuration shipped in a revision with the about
/// route and one without it.
pub fn route_table(config: &RouterConfig) -> TableResult<RouteTable> {
    let game: Arc<dyn View> = Arc::new(GameView);

    let mut builder = RouteTableBuilder::new()
        .route(RouteDef::eager("/", "home", game.clone()))
        .route(RouteDef::eager("/game", "game", game))
        .not_found_view(not_found_view())
        .load_failure_view(load_failure_view());

    if config.routes.about_enabled {
        builder = builder.route(RouteDef::lazy("/about", "about", Arc::new(AboutLoader::new())));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let table = route_table(&RouterConfig::default()).unwrap();
        assert_eq!(table.len(), 3);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["home", "game", "about"]);
        assert!(table.by_name("about").unwrap().1.source.is_lazy());
    }

    #[test]
    fn test_table_without_about() {
        let mut config = RouterConfig::default();
        config.routes.about_enabled = false;
        let table = route_table(&config).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.resolve("/about").is_none());
    }
}
