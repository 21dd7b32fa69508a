use portal_output_tracker::{OutputListenerMt, OutputTrackerMt};
use std::sync::{Arc, Mutex};
use tracing::trace;

/// In-process history of visited paths. The last entry is the current path.
pub struct Router {
    history: HistorySource,
    route_listener: OutputListenerMt<RouteChange>,
}

impl Router {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            history: HistorySource::InMemory(Mutex::new(vec![start_path.into()])),
            route_listener: OutputListenerMt::new(),
        }
    }

    pub fn new_null() -> Self {
        Self::new_null_with(Self::ROOT)
    }

    /// A router stuck on `path`. Pushes are recorded but never change the current path.
    pub fn new_null_with(path: impl Into<String>) -> Self {
        Self {
            history: HistorySource::Stub(path.into()),
            route_listener: OutputListenerMt::new(),
        }
    }

    pub const ROOT: &'static str = "/";

    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        trace!(path = %path, "Route pushed");
        if self.route_listener.is_tracked() {
            self.route_listener.emit(RouteChange::Push(path.clone()));
        }
        if let HistorySource::InMemory(entries) = &self.history {
            entries.lock().unwrap().push(path);
        }
    }

    /// Returns false if there is no previous entry to go back to
    pub fn back(&self) -> bool {
        let went_back = match &self.history {
            HistorySource::InMemory(entries) => {
                let mut guard = entries.lock().unwrap();
                if guard.len() > 1 {
                    guard.pop();
                    true
                } else {
                    false
                }
            }
            HistorySource::Stub(_) => false,
        };

        if went_back && self.route_listener.is_tracked() {
            self.route_listener.emit(RouteChange::Back);
        }
        went_back
    }

    pub fn current_path(&self) -> String {
        match &self.history {
            HistorySource::InMemory(entries) => entries
                .lock()
                .unwrap()
                .last()
                .cloned()
                .unwrap_or_else(|| Self::ROOT.to_owned()),
            HistorySource::Stub(path) => path.clone(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        match &self.history {
            HistorySource::InMemory(entries) => entries.lock().unwrap().len() > 1,
            HistorySource::Stub(_) => false,
        }
    }

    pub fn track(&self) -> Arc<OutputTrackerMt<RouteChange>> {
        self.route_listener.track()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Self::ROOT)
    }
}

enum HistorySource {
    InMemory(Mutex<Vec<String>>),
    Stub(String),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RouteChange {
    Push(String),
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_given_path() {
        let router = Router::new("/authenticated/parent");
        assert_eq!(router.current_path(), "/authenticated/parent");
        assert_eq!(router.can_go_back(), false);
    }

    #[test]
    fn default_starts_at_root() {
        assert_eq!(Router::default().current_path(), "/");
    }

    #[test]
    fn push_changes_current_path() {
        let router = Router::default();
        router.push("/authenticated/admin/users");
        assert_eq!(router.current_path(), "/authenticated/admin/users");
        assert!(router.can_go_back());
    }

    #[test]
    fn back_restores_previous_path() {
        let router = Router::new("/a");
        router.push("/b");
        assert!(router.back());
        assert_eq!(router.current_path(), "/a");
    }

    #[test]
    fn cannot_go_back_past_start() {
        let router = Router::new("/a");
        assert_eq!(router.back(), false);
        assert_eq!(router.current_path(), "/a");
    }

    #[test]
    fn track_route_changes() {
        let router = Router::default();
        let tracker = router.track();
        router.push("/b");
        router.back();
        assert_eq!(
            tracker.output(),
            [RouteChange::Push("/b".to_owned()), RouteChange::Back]
        );
    }

    mod nullability {
        use super::*;

        #[test]
        fn can_be_nulled() {
            let router = Router::new_null();
            assert_eq!(router.current_path(), "/");
        }

        #[test]
        fn push_does_not_change_stubbed_path() {
            let router = Router::new_null_with("/authenticated/educator/home");
            router.push("/authenticated/educator/feedback");
            assert_eq!(router.current_path(), "/authenticated/educator/home");
        }

        #[test]
        fn pushes_are_tracked() {
            let router = Router::new_null();
            let tracker = router.track();
            router.push("/x");
            assert_eq!(tracker.output(), [RouteChange::Push("/x".to_owned())]);
        }

        #[test]
        fn back_is_a_no_op() {
            let router = Router::new_null();
            let tracker = router.track();
            assert_eq!(router.back(), false);
            assert!(tracker.output().is_empty());
        }
    }
}
