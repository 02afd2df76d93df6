use crate::shared::infrastructure::id_generator::IdGenerator;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Epoch milliseconds as ids. Two requests within the same millisecond get
/// consecutive values, so ids stay strictly increasing.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicI64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => previous = actual,
            }
        }
    }
}
