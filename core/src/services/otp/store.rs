//! Concurrent, TTL-bounded store for pending verification codes

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::entities::otp::PendingOtp;
use crate::errors::OtpFailure;

/// In-memory ledger mapping an email address to its pending code
///
/// One global mutex guards the map; every critical section is a handful of
/// map operations and never touches a collaborator, so contention stays
/// negligible at this scale. `check_and_consume` is linearizable per key:
/// of any number of concurrent calls presenting the correct code for the
/// same address, exactly one succeeds and the rest observe an empty slot.
///
/// Expiry is evaluated lazily at check time. An expired entry that is never
/// checked again simply stays dead until the next `put` replaces it; there
/// is no background sweeper.
pub struct OtpStore {
    entries: Mutex<HashMap<String, PendingOtp>>,
}

impl OtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Store a code for an address, replacing any existing entry
    ///
    /// The new entry expires `ttl_seconds` from now.
    pub fn put(&self, email: &str, code: &str, ttl_seconds: i64) {
        let entry = PendingOtp::new(email.to_string(), code.to_string(), ttl_seconds);
        let mut entries = self.lock();
        entries.insert(email.to_string(), entry);
    }

    /// Atomically check a presented code and consume the entry on success
    ///
    /// * No entry for the address: `OtpFailure::NotFound`.
    /// * Entry past its expiry: `OtpFailure::Expired`; the entry is removed,
    ///   expiry is terminal and a later retry reports `NotFound`.
    /// * Wrong code: `OtpFailure::Mismatch`; the entry stays, retries within
    ///   the TTL remain possible.
    /// * Exact match: the entry is removed and the check succeeds.
    pub fn check_and_consume(&self, email: &str, presented: &str) -> Result<(), OtpFailure> {
        let mut entries = self.lock();

        let entry = entries.get(email).ok_or(OtpFailure::NotFound)?;

        if entry.is_expired() {
            entries.remove(email);
            return Err(OtpFailure::Expired);
        }

        if !entry.matches(presented) {
            return Err(OtpFailure::Mismatch);
        }

        entries.remove(email);
        debug!(entries = entries.len(), "Consumed pending verification code");
        Ok(())
    }

    /// Whether a pending entry exists for the address (expired or not)
    pub fn contains(&self, email: &str) -> bool {
        self.lock().contains_key(email)
    }

    /// Number of pending entries, including expired-but-unconsumed ones
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, PendingOtp>> {
        // A panic while holding the lock cannot leave the map half-updated,
        // so a poisoned guard is still safe to use
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for OtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_check_unknown_address() {
        let store = OtpStore::new();
        assert_eq!(
            store.check_and_consume("a@x.com", "123456"),
            Err(OtpFailure::NotFound)
        );
    }

    #[test]
    fn test_consume_succeeds_exactly_once() {
        let store = OtpStore::new();
        store.put("a@x.com", "123456", 600);

        assert_eq!(store.check_and_consume("a@x.com", "123456"), Ok(()));
        assert_eq!(
            store.check_and_consume("a@x.com", "123456"),
            Err(OtpFailure::NotFound)
        );
    }

    #[test]
    fn test_mismatch_keeps_entry() {
        let store = OtpStore::new();
        store.put("a@x.com", "123456", 600);

        assert_eq!(
            store.check_and_consume("a@x.com", "000000"),
            Err(OtpFailure::Mismatch)
        );
        // Entry survives the failed attempt
        assert_eq!(store.check_and_consume("a@x.com", "123456"), Ok(()));
    }

    #[test]
    fn test_expiry_is_terminal() {
        let store = OtpStore::new();
        store.put("a@x.com", "123456", -1);

        assert_eq!(
            store.check_and_consume("a@x.com", "123456"),
            Err(OtpFailure::Expired)
        );
        // The expired entry was evicted; a stale re-check cannot resurrect it
        assert_eq!(
            store.check_and_consume("a@x.com", "123456"),
            Err(OtpFailure::NotFound)
        );
        assert!(!store.contains("a@x.com"));
    }

    #[test]
    fn test_put_replaces_previous_entry() {
        let store = OtpStore::new();
        store.put("a@x.com", "111111", 600);
        store.put("a@x.com", "222222", 600);

        assert_eq!(
            store.check_and_consume("a@x.com", "111111"),
            Err(OtpFailure::Mismatch)
        );
        assert_eq!(store.check_and_consume("a@x.com", "222222"), Ok(()));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_entries_are_keyed_per_address() {
        let store = OtpStore::new();
        store.put("a@x.com", "111111", 600);
        store.put("b@x.com", "222222", 600);

        assert_eq!(store.check_and_consume("a@x.com", "111111"), Ok(()));
        assert!(store.contains("b@x.com"));
    }

    #[test]
    fn test_concurrent_consume_yields_single_winner() {
        let store = Arc::new(OtpStore::new());
        store.put("a@x.com", "123456", 600);

        let barrier = Arc::new(std::sync::Barrier::new(16));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    store.check_and_consume("a@x.com", "123456")
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| *r == Err(OtpFailure::NotFound)));
    }
}
