use crate::shared::infrastructure::id_generator::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `"1"`, `"2"`, `"3"`, ... for the lifetime of the process.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
