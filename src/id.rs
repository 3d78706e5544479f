//! Record id generation. The store owns one generator shared by dishes and orders.

use std::sync::atomic::{AtomicU64, Ordering};

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;

    /// Mark `existing` as taken so `next_id` never returns it.
    fn reserve(&self, _existing: &str) {}
}

/// Random ids: a v4 UUID rendered as 32 lowercase hex characters.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids "1", "2", ... Used by tests and by `ID_STRATEGY=sequential`.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Numeric ids move the counter past them; anything else cannot collide.
    fn reserve(&self, existing: &str) {
        if let Ok(n) = existing.parse::<u64>() {
            self.next.fetch_max(n.saturating_add(1), Ordering::Relaxed);
        }
    }
}
