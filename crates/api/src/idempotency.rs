// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replay protection for retried lifecycle requests.
//!
//! A key is bound to the first shift it is used with. Replaying the key
//! for that shift returns the stored response; using it for any other
//! shift is an input error.
//!
//! The ledger holds a bounded number of keys. Once full, recording a new
//! key forgets the oldest one, after which that key is treated as unused.

use std::collections::{HashMap, VecDeque};

use care_shifts_domain::ShiftId;

use crate::error::{ApiError, invalid};

#[derive(Debug, Clone)]
struct Entry<T> {
    shift_id: ShiftId,
    response: T,
}

/// Keys a ledger remembers unless told otherwise.
pub const DEFAULT_LEDGER_CAPACITY: usize = 10_000;

/// Remembers responses by idempotency key, oldest first out.
#[derive(Debug, Clone)]
pub struct IdempotencyLedger<T> {
    entries: HashMap<String, Entry<T>>,
    order: VecDeque<String>,
    capacity: usize,
}

impl<T> Default for IdempotencyLedger<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LEDGER_CAPACITY)
    }
}

impl<T> IdempotencyLedger<T> {
    /// Creates an empty ledger holding at most `capacity` keys.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }
}

impl<T: Clone> IdempotencyLedger<T> {
    /// Creates an empty ledger with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored response for `key`, if the key was used for
    /// `shift_id` before.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` on field `idempotency_key` if the
    /// key was used for a different shift.
    pub fn replay(&self, key: &str, shift_id: &ShiftId) -> Result<Option<T>, ApiError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(entry) if &entry.shift_id == shift_id => Ok(Some(entry.response.clone())),
            Some(entry) => Err(invalid(
                "idempotency_key",
                format!(
                    "Key '{key}' was already used for shift '{}'",
                    entry.shift_id
                ),
            )),
        }
    }

    /// Stores the response for `key`. An existing entry is kept.
    ///
    /// When the ledger is full the oldest key is evicted first.
    pub fn record(&mut self, key: &str, shift_id: &ShiftId, response: &T) {
        if self.entries.contains_key(key) {
            return;
        }
        while self.order.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            tracing::debug!(key = %oldest, "Evicted idempotency key");
        }
        self.order.push_back(key.to_string());
        self.entries.insert(
            key.to_string(),
            Entry {
                shift_id: shift_id.clone(),
                response: response.clone(),
            },
        );
    }

    /// Maximum number of remembered keys.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of remembered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
