//! In-process guest registry.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rsvp_core::RsvpError;
use rsvp_core::error::Result;
use rsvp_core::registry::RegistryGateway;
use tokio::sync::RwLock;

/// Registry held in memory; lost when the process exits.
///
/// Reads and writes can be made to fail, which is how the save-error path
/// is exercised without a network.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    names: RwLock<Vec<String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: RwLock::new(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Vec<String> {
        self.names.read().await.clone()
    }
}

#[async_trait]
impl RegistryGateway for InMemoryRegistry {
    async fn fetch_all(&self) -> Result<Vec<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RsvpError::registry("in-memory registry set to fail reads"));
        }
        Ok(self.names.read().await.clone())
    }

    async fn replace_all(&self, names: &[String]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RsvpError::registry("in-memory registry set to fail writes"));
        }
        *self.names.write().await = names.to_vec();
        Ok(())
    }
}
