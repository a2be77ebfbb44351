use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialRepository;

/// Process-local credential store.
///
/// Lookups share the read lock; registrations take the write lock, so every
/// operation is atomic with respect to the others. Records live for the
/// lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    /// Map of username -> registered secret and token
    records: Arc<RwLock<HashMap<Username, UserRecord>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn upsert(
        &self,
        username: Username,
        record: UserRecord,
    ) -> Result<Option<UserRecord>, CredentialError> {
        Ok(self.records.write().await.insert(username, record))
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, CredentialError> {
        Ok(self.records.read().await.get(username).cloned())
    }

    async fn count(&self) -> Result<usize, CredentialError> {
        Ok(self.records.read().await.len())
    }
}
