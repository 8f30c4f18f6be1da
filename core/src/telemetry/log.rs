use log::info;
use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 20;

/// Bounded, newest-last record of load outcomes shown in the activity panel.
///
/// Every entry is also emitted through the `log` facade.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        info!("{}", entry);
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
