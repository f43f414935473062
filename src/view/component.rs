//! View components and their loading strategies.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// A renderable view.
///
/// Views are opaque to the router: it only needs them to exist as
/// resolvable units. The game and about views of the application live
/// behind this trait; the router never looks inside.
pub trait View: Send + Sync + fmt::Debug {
    /// Stable component name, used in logs and snapshots.
    fn name(&self) -> &str;

    /// Produce the rendered representation of the view.
    fn render(&self) -> String;
}

/// Errors that can occur while loading a deferred view.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Fetching the deferred module failed.
    #[error("view fetch failed: {0}")]
    Fetch(String),

    /// The load did not complete within the configured timeout.
    #[error("view load timed out after {0} ms")]
    Timeout(u64),
}

/// Asynchronous producer of a deferred view.
///
/// Implementations fetch and resolve the view module on first use; the
/// [`LoaderCache`](super::cache::LoaderCache) guarantees a successful load
/// happens at most once per route.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn View>, LoadError>;
}

/// How a route obtains its view.
#[derive(Clone)]
pub enum ComponentSource {
    /// View bound at table construction time.
    Eager(Arc<dyn View>),

    /// View produced asynchronously on first navigation to the route.
    Lazy(Arc<dyn ViewLoader>),
}

impl fmt::Debug for ComponentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentSource::Eager(view) => f.debug_tuple("Eager").field(&view.name()).finish(),
            ComponentSource::Lazy(_) => f.debug_tuple("Lazy").finish(),
        }
    }
}

impl ComponentSource {
    /// Whether this source defers its view to first navigation.
    pub fn is_lazy(&self) -> bool {
        matches!(self, ComponentSource::Lazy(_))
    }
}

/// A view backed by a static name and body. Useful for fallback pages
/// and tests.
#[derive(Debug, Clone)]
pub struct StaticView {
    name: &'static str,
    body: &'static str,
}

impl StaticView {
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }
}

impl View for StaticView {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self) -> String {
        self.body.to_string()
    }
}
