//! The ear-trainer view components.
//!
//! The game logic itself (note generation, audio playback, scoring) lives
//! elsewhere; these views are the resolvable units the router navigates
//! toward.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use crate::view::{LoadError, StaticView, View, ViewLoader};

/// The main game screen. Served eagerly for both `/` and `/game`.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl View for GameView {
    fn name(&self) -> &str {
        "GameView"
    }

    fn render(&self) -> String {
        "Ear Trainer — listen to the interval and name it".to_string()
    }
}

/// The about page, produced by [`AboutLoader`] on first visit.
#[derive(Debug, Clone)]
pub struct AboutView;

impl View for AboutView {
    fn name(&self) -> &str {
        "AboutView"
    }

    fn render(&self) -> String {
        "About — a small game for practicing musical interval recognition".to_string()
    }
}

/// Deferred producer of the about view.
///
/// Stands in for fetching a separately bundled view module; the small
/// delay models the fetch-and-parse step.
#[derive(Debug, Default)]
pub struct AboutLoader {
    /// Simulated fetch duration.
    pub delay: Duration,
}

impl AboutLoader {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(50),
        }
    }
}

#[async_trait]
impl ViewLoader for AboutLoader {
    async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
        sleep(self.delay).await;
        Ok(Arc::new(AboutView))
    }
}

/// Fallback for unmatched paths.
pub fn not_found_view() -> Arc<dyn View> {
    Arc::new(StaticView::new("NotFoundView", "Page not found"))
}

/// Fallback shown when a deferred view fails to load.
pub fn load_failure_view() -> Arc<dyn View> {
    Arc::new(StaticView::new(
        "LoadFailedView",
        "This page could not be loaded — try again",
    ))
}
