// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::{Error, Result};

/// Seam to the session store of the embedding application.
///
/// The redirect flow persists the session before the response is sealed,
/// so a freshly written flash message or authentication state survives
/// the navigation that follows.
#[async_trait]
pub trait Session: Send + Sync {
    /// Whether the session carries unsaved changes.
    fn has_changed(&self) -> bool;

    /// Persist the session to its backing store.
    async fn write(&self) -> Result<()>;
}

/// Session used for testing.
#[derive(Debug, Default)]
pub struct MockSession {
    changed: bool,
    fail_write: bool,
    writes: AtomicUsize,
}

impl MockSession {
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Arm the mock so `write` fails.
    pub fn failing() -> Self {
        Self {
            changed: true,
            fail_write: true,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Session for MockSession {
    fn has_changed(&self) -> bool {
        self.changed
    }

    async fn write(&self) -> Result<()> {
        if self.fail_write {
            return Err(Error::Session("mock session write failure".into()));
        }

        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
