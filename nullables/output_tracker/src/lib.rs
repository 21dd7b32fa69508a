use std::sync::{Arc, Mutex, Weak};

/// Broadcasts emitted values to every live tracker.
/// Trackers are held weakly, so dropping a tracker stops the recording.
pub struct OutputListenerMt<T: Clone> {
    trackers: Mutex<Vec<Weak<OutputTrackerMt<T>>>>,
}

impl<T: Clone> OutputListenerMt<T> {
    pub fn new() -> Self {
        Self {
            trackers: Mutex::new(Vec::new()),
        }
    }

    pub fn track(&self) -> Arc<OutputTrackerMt<T>> {
        let tracker = Arc::new(OutputTrackerMt::new());
        self.trackers
            .lock()
            .unwrap()
            .push(Arc::downgrade(&tracker));
        tracker
    }

    pub fn emit(&self, value: T) {
        let mut guard = self.trackers.lock().unwrap();
        guard.retain(|t| t.strong_count() > 0);
        for tracker in guard.iter().filter_map(|t| t.upgrade()) {
            tracker.add(value.clone());
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.tracker_count() > 0
    }

    pub fn tracker_count(&self) -> usize {
        self.trackers
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.strong_count() > 0)
            .count()
    }
}

impl<T: Clone> Default for OutputListenerMt<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OutputTrackerMt<T: Clone> {
    output: Mutex<Vec<T>>,
}

impl<T: Clone> OutputTrackerMt<T> {
    fn new() -> Self {
        Self {
            output: Mutex::new(Vec::new()),
        }
    }

    fn add(&self, value: T) {
        self.output.lock().unwrap().push(value);
    }

    pub fn output(&self) -> Vec<T> {
        self.output.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.output.lock().unwrap().clear();
    }
}
