//! Short-lived category signal shared across interception surfaces.
//!
//! Last-write-wins with a ~2 s expiry re-armed on every write. A
//! generation counter guarantees that an overtaken expiry timer can
//! never clear a value written by a later `set`. This is a signal,
//! not a queue: concurrently raised notifications have no ordering
//! guarantee against each other.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Expiry window matching the hosted page's audio-feedback latency.
pub const DEFAULT_TTL: Duration = Duration::from_secs(2);

#[derive(Debug)]
struct Slot {
    value: Option<String>,
    generation: u64,
    expires_at: Instant,
}

/// Single-writer/multi-reader category signal with expiry.
#[derive(Debug, Clone)]
pub struct NotificationTypeState {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl Default for NotificationTypeState {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationTypeState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                value: None,
                generation: 0,
                expires_at: Instant::now(),
            })),
            ttl,
        }
    }

    /// Store a category and (re)arm the expiry window.
    ///
    /// Must run inside a tokio runtime: the clear is scheduled as a
    /// task guarded by the generation current at write time.
    pub fn set(&self, category: &str) {
        let generation = {
            let mut slot = self.lock();
            slot.value = Some(category.to_string());
            slot.generation += 1;
            slot.expires_at = Instant::now() + self.ttl;
            slot.generation
        };

        let state = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(state.ttl).await;
            state.expire(generation);
        });
    }

    /// Current category, if any. A value past its deadline counts as
    /// expired even when its timer has not fired yet.
    pub fn get(&self) -> Option<String> {
        let slot = self.lock();
        if slot.value.is_some() && Instant::now() >= slot.expires_at {
            return None;
        }
        slot.value.clone()
    }

    /// Drop any pending value immediately.
    pub fn clear(&self) {
        self.lock().value = None;
    }

    /// Clear the value iff `generation` is still the current write.
    fn expire(&self, generation: u64) {
        let mut slot = self.lock();
        if slot.generation == generation {
            slot.value = None;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
