use gloo::history::{BrowserHistory, History, HistoryListener};
use shared::Route;

use super::logging::Logger;

/// Pushes routes onto the browser history
#[derive(Clone, Default)]
pub struct Navigator {
    history: BrowserHistory,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, route: Route) {
        Logger::debug_with_component("navigator", &format!("navigating to {}", route));
        self.history.push(route.path());
    }

    pub fn current(&self) -> Route {
        Route::from_path(self.history.location().path())
    }

    /// Listener stays registered until the returned handle is dropped
    pub fn listen<F>(&self, on_change: F) -> HistoryListener
    where
        F: Fn() + 'static,
    {
        self.history.listen(on_change)
    }
}

// every instance wraps the same window history
impl PartialEq for Navigator {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
