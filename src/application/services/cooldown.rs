//! Cooldown tracker - Per-command, per-user invocation throttling

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Outcome of a cooldown check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cooldown {
    Granted,
    /// Seconds left in the window, rounded to one decimal
    Denied { remaining_secs: f64 },
}

impl Cooldown {
    pub fn is_granted(&self) -> bool {
        matches!(self, Cooldown::Granted)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    last_used_ms: i64,
    window_ms: i64,
}

impl Entry {
    fn expired(&self, now_ms: i64) -> bool {
        self.last_used_ms + self.window_ms <= now_ms
    }
}

/// Tracks the last allowed invocation per (command, user)
///
/// The whole check-and-set happens under one lock, so two concurrent
/// attempts for the same key can never both be granted.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    // command -> user -> entry
    entries: Mutex<HashMap<String, HashMap<String, Entry>>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and, when granted, record an invocation at `now_ms`
    ///
    /// A zero cooldown is always granted and records nothing. A denied attempt
    /// leaves the stored timestamp untouched.
    pub fn try_acquire(
        &self,
        command: &str,
        user: &str,
        cooldown_secs: u64,
        now_ms: i64,
    ) -> Cooldown {
        if cooldown_secs == 0 {
            return Cooldown::Granted;
        }

        let window_ms = i64::try_from(cooldown_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        let mut entries = self.lock();
        let users = entries.entry(command.to_string()).or_default();

        if let Some(entry) = users.get(user) {
            let expires_at = entry.last_used_ms.saturating_add(window_ms);
            if now_ms < expires_at {
                return Cooldown::Denied {
                    remaining_secs: round_tenths(expires_at - now_ms),
                };
            }
        }

        // Opportunistic eviction while we hold the lock anyway
        users.retain(|_, entry| !entry.expired(now_ms));
        users.insert(
            user.to_string(),
            Entry {
                last_used_ms: now_ms,
                window_ms,
            },
        );

        Cooldown::Granted
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self, now_ms: i64) -> usize {
        let mut entries = self.lock();
        let mut removed = 0;

        for users in entries.values_mut() {
            let before = users.len();
            users.retain(|_, entry| !entry.expired(now_ms));
            removed += before - users.len();
        }
        entries.retain(|_, users| !users.is_empty());

        removed
    }

    /// Number of tracked (command, user) pairs, expired or not
    pub fn len(&self) -> usize {
        self.lock().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HashMap<String, Entry>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn round_tenths(ms: i64) -> f64 {
    (ms as f64 / 100.0).round() / 10.0
}
