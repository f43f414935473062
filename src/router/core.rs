//! The history-backed router.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arc_swap::ArcSwapOption;

use crate::config::RouterConfig;
use crate::history::{History, HistoryEntry, HistorySnapshot};
use crate::routing::table::normalize_path;
use crate::routing::{RouteDef, RouteTable};
use crate::view::{ComponentSource, LoadError, LoaderCache, View};

/// The view currently on screen, published after each committed navigation.
#[derive(Clone)]
pub struct ActiveView {
    /// Name of the resolved route.
    pub route: String,
    /// External path (base prefix included).
    pub path: String,
    /// The resolved view component.
    pub view: Arc<dyn View>,
}

/// Result of a navigation request.
pub enum Outcome {
    /// The path resolved and its view is ready.
    Rendered { route: String, view: Arc<dyn View> },

    /// No route matched. Carries the table's not-found view when one is
    /// configured. Nothing is committed to history.
    NotFound {
        path: String,
        fallback: Option<Arc<dyn View>>,
    },

    /// A deferred load failed. Carries the table's load-failure view when
    /// one is configured. Nothing is committed to history; the next visit
    /// retries the load.
    LoadFailed {
        route: String,
        error: LoadError,
        fallback: Option<Arc<dyn View>>,
    },

    /// A newer navigation started while this one was loading; this one
    /// committed nothing. The completed load stays cached.
    Superseded { path: String },
}

impl Outcome {
    /// The view to put on screen, if the outcome carries one.
    pub fn view(&self) -> Option<&Arc<dyn View>> {
        match self {
            Outcome::Rendered { view, .. } => Some(view),
            Outcome::NotFound { fallback, .. } | Outcome::LoadFailed { fallback, .. } => {
                fallback.as_ref()
            }
            Outcome::Superseded { .. } => None,
        }
    }
}

/// History-backed router over an immutable route table.
///
/// Explicitly constructed and explicitly passed; there is no module-level
/// instance. Only successful route activations reach the history stack,
/// so back/forward never step onto a page that was never shown.
pub struct Router {
    /// Normalized base prefix ("/" or "/app").
    base: String,
    table: RouteTable,
    cache: LoaderCache,
    history: Mutex<History>,
    active: ArcSwapOption<ActiveView>,
    nav_seq: AtomicU64,
}

impl Router {
    /// Build a router from validated configuration and a compiled table.
    pub fn new(config: &RouterConfig, table: RouteTable) -> Self {
        let base = normalize_path(&config.base.path).to_string();
        tracing::info!(
            base = %base,
            routes = table.len(),
            lazy_load_timeout_ms = config.lazy_load.timeout_ms,
            "router constructed"
        );
        Self {
            base,
            table,
            cache: LoaderCache::new(Duration::from_millis(config.lazy_load.timeout_ms)),
            history: Mutex::new(History::new()),
            active: ArcSwapOption::empty(),
            nav_seq: AtomicU64::new(0),
        }
    }

    /// Navigate to an external path (base prefix included).
    ///
    /// Query strings and fragments are ignored for matching. Lazy routes
    /// suspend here until their view resolves (first visit only).
    pub async fn navigate(&self, target: &str) -> Outcome {
        let seq = self.next_seq();
        let path = strip_query(target);

        let Some(app_path) = self.strip_base(path) else {
            tracing::warn!(path, base = %self.base, "navigation outside base prefix");
            return self.not_found(path);
        };

        let Some((_, def)) = self.table.resolve(&app_path) else {
            tracing::warn!(path, "no route matched");
            return self.not_found(path);
        };

        let view = match self.load_view(def).await {
            Ok(view) => view,
            Err(error) => {
                return Outcome::LoadFailed {
                    route: def.name.clone(),
                    error,
                    fallback: self.table.load_failure_view().cloned(),
                }
            }
        };

        let external = self.external_path(&app_path);
        {
            // Commit and publish under one lock so current() can never
            // trail behind the newest history entry.
            let mut history = self.history_lock();
            if self.nav_seq.load(Ordering::SeqCst) != seq {
                tracing::debug!(path, "navigation superseded before commit");
                return Outcome::Superseded {
                    path: path.to_string(),
                };
            }
            history.push(HistoryEntry::new(external.clone(), def.name.clone()));
            self.publish(def, &external, view.clone());
        }

        tracing::info!(path = %external, route = %def.name, view = view.name(), "navigated");

        Outcome::Rendered {
            route: def.name.clone(),
            view,
        }
    }

    /// Step back one history entry and re-activate it.
    ///
    /// Returns `None` when there is nothing to step back to. Lazy views
    /// come out of the completion cache, so no load is re-triggered.
    /// Stepping is itself a navigation: it supersedes any load still in
    /// flight, so the page stepped away from cannot reassert itself.
    pub async fn back(&self) -> Option<Outcome> {
        let (entry, seq) = {
            let mut history = self.history_lock();
            let entry = history.back()?.clone();
            // Bump under the lock: a stepless back() must not cancel
            // anything, and commits are serialized on this lock.
            (entry, self.next_seq())
        };
        tracing::debug!(path = %entry.path, "history back");
        Some(self.activate(entry, seq).await)
    }

    /// Step forward one history entry and re-activate it.
    ///
    /// Like [`back`](Self::back), this supersedes any in-flight load.
    pub async fn forward(&self) -> Option<Outcome> {
        let (entry, seq) = {
            let mut history = self.history_lock();
            let entry = history.forward()?.clone();
            (entry, self.next_seq())
        };
        tracing::debug!(path = %entry.path, "history forward");
        Some(self.activate(entry, seq).await)
    }

    /// The view currently on screen, readable without locking.
    pub fn current(&self) -> Option<Arc<ActiveView>> {
        self.active.load_full()
    }

    /// Serializable dump of the history stack.
    pub fn history_snapshot(&self) -> HistorySnapshot {
        self.history_lock().snapshot()
    }

    fn history_lock(&self) -> std::sync::MutexGuard<'_, History> {
        match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn next_seq(&self) -> u64 {
        self.nav_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The compiled route table backing this router.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Re-activate a history entry without growing the stack.
    async fn activate(&self, entry: HistoryEntry, seq: u64) -> Outcome {
        let Some((_, def)) = self.table.by_name(&entry.route) else {
            // Entries only ever come from this table, so this is unreachable
            // short of a table/history mix-up between router instances.
            return self.not_found(&entry.path);
        };
        match self.load_view(def).await {
            Ok(view) => {
                let _history = self.history_lock();
                if self.nav_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(path = %entry.path, "history step superseded before publish");
                    return Outcome::Superseded { path: entry.path };
                }
                self.active.store(Some(Arc::new(ActiveView {
                    route: def.name.clone(),
                    path: entry.path.clone(),
                    view: view.clone(),
                })));
                Outcome::Rendered {
                    route: def.name.clone(),
                    view,
                }
            }
            Err(error) => Outcome::LoadFailed {
                route: def.name.clone(),
                error,
                fallback: self.table.load_failure_view().cloned(),
            },
        }
    }

    async fn load_view(&self, def: &RouteDef) -> Result<Arc<dyn View>, LoadError> {
        match &def.source {
            ComponentSource::Eager(view) => Ok(view.clone()),
            ComponentSource::Lazy(loader) => self.cache.get_or_load(&def.name, loader).await,
        }
    }

    fn publish(&self, def: &RouteDef, external: &str, view: Arc<dyn View>) {
        self.active.store(Some(Arc::new(ActiveView {
            route: def.name.clone(),
            path: external.to_string(),
            view,
        })));
    }

    fn not_found(&self, path: &str) -> Outcome {
        Outcome::NotFound {
            path: path.to_string(),
            fallback: self.table.not_found_view().cloned(),
        }
    }

    /// Translate an external path into an in-app path by stripping the
    /// base prefix. A path outside the prefix has no in-app form.
    fn strip_base(&self, path: &str) -> Option<String> {
        if self.base == "/" {
            return Some(path.to_string());
        }
        let normalized = normalize_path(path);
        if normalized == self.base {
            return Some("/".to_string());
        }
        match normalized.strip_prefix(&self.base) {
            Some(rest) if rest.starts_with('/') => Some(rest.to_string()),
            _ => None,
        }
    }

    /// Re-attach the base prefix to an in-app path for display and history.
    fn external_path(&self, app_path: &str) -> String {
        let app = normalize_path(app_path);
        if self.base == "/" {
            app.to_string()
        } else if app == "/" {
            self.base.clone()
        } else {
            format!("{}{}", self.base, app)
        }
    }
}

/// Drop the query string and fragment from a navigation target.
fn strip_query(target: &str) -> &str {
    match target.find(['?', '#']) {
        Some(i) => &target[..i],
        None => target,
    }
}
