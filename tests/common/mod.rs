//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use trainer_router::config::RouterConfig;
use trainer_router::routing::{RouteDef, RouteTable, RouteTableBuilder};
use trainer_router::view::{LoadError, StaticView, View, ViewLoader};

/// Instrumented loader: counts invocations, optionally delays, and can
/// fail its first N calls.
#[derive(Debug)]
#[allow(dead_code)]
pub struct TestLoader {
    pub calls: AtomicU32,
    delay: Duration,
    fail_first: u32,
}

#[allow(dead_code)]
impl TestLoader {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
            delay: Duration::ZERO,
            fail_first: 0,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            calls: AtomicU32::new(0),
            delay,
            fail_first: 0,
        }
    }

    pub fn failing_first(n: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            delay: Duration::ZERO,
            fail_first: n,
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewLoader for TestLoader {
    async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if call < self.fail_first {
            return Err(LoadError::Fetch("simulated fetch failure".into()));
        }
        Ok(Arc::new(StaticView::new("AboutView", "about page")))
    }
}

/// The version-1 table (`/`, `/game`, `/about`) with an injectable about
/// loader, plus both fallback views.
#[allow(dead_code)]
pub fn trainer_table(about: Arc<dyn ViewLoader>) -> RouteTable {
    let game: Arc<dyn View> = Arc::new(StaticView::new("GameView", "game screen"));
    RouteTableBuilder::new()
        .route(RouteDef::eager("/", "home", game.clone()))
        .route(RouteDef::eager("/game", "game", game))
        .route(RouteDef::lazy("/about", "about", about))
        .not_found_view(Arc::new(StaticView::new("NotFoundView", "page not found")))
        .load_failure_view(Arc::new(StaticView::new("LoadFailedView", "load failed")))
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn config_with_base(base: &str) -> RouterConfig {
    let mut config = RouterConfig::default();
    config.base.path = base.to_string();
    config
}
