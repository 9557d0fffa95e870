/// Remembers how many messages the previous fetch returned.
#[derive(Debug, Default, Clone)]
pub struct SyncTracker {
    previous_count: usize,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetch result and report whether it counts as new activity.
    /// The very first non-empty load never does.
    pub fn observe(&mut self, count: usize) -> bool {
        let has_new = count > self.previous_count && self.previous_count > 0;
        self.previous_count = count;
        has_new
    }

    pub fn previous_count(&self) -> usize {
        self.previous_count
    }
}
