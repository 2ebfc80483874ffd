//! Run-scoped uniqueness state.
//!
//! Every value that has to be unique within a run is tracked here. The
//! stores live inside a [`GenerationContext`](crate::GenerationContext), so
//! two runs in the same process never see each other's values.

use std::collections::{HashMap, HashSet};

/// Sequence counters and emitted values for one generation run.
#[derive(Debug, Default)]
pub struct UniqueStores {
    /// Last issued number per key value, shared by every sequence column
    sequences: HashMap<String, i32>,
    /// Every email address handed out so far
    emails: HashSet<String>,
}

impl UniqueStores {
    /// Create empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next number of the sequence for `key`.
    ///
    /// The first call for a key returns 0. Returns `None` once the sequence
    /// has reached `i32::MAX`.
    pub fn next_sequence(&mut self, key: &str) -> Option<i32> {
        match self.sequences.get_mut(key) {
            Some(last) => {
                *last = last.checked_add(1)?;
                Some(*last)
            }
            None => {
                self.sequences.insert(key.to_string(), 0);
                Some(0)
            }
        }
    }

    /// Record an email address. Returns `false` if it was already emitted.
    pub fn insert_email(&mut self, email: &str) -> bool {
        if self.emails.contains(email) {
            return false;
        }
        self.emails.insert(email.to_string())
    }

    /// Number of distinct email addresses emitted.
    pub fn email_count(&self) -> usize {
        self.emails.len()
    }
}
