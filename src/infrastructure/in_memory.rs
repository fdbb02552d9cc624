use crate::domain::account::{Account, AccountId, SharedAccount};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory store for accounts.
///
/// Uses `Arc<RwLock<HashMap<AccountId, SharedAccount>>>` to allow shared
/// concurrent access: lookups take the map's read lock, creation takes its
/// write lock, and balance mutation happens behind each account's own mutex.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, SharedAccount>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.id()) {
            return Err(LedgerError::DuplicateAccount(account.id().clone()));
        }
        accounts.insert(account.id().clone(), Arc::new(Mutex::new(account)));
        Ok(())
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>> {
        // Clone the handle out so the map lock is not held across the
        // account lock.
        let account = { self.accounts.read().await.get(id).cloned() };
        match account {
            Some(account) => Ok(Some(account.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn handle(&self, id: &AccountId) -> Result<Option<SharedAccount>> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>> {
        let handles: Vec<SharedAccount> =
            { self.accounts.read().await.values().cloned().collect() };
        let mut accounts = Vec::with_capacity(handles.len());
        for handle in handles {
            accounts.push(handle.lock().await.clone());
        }
        Ok(accounts)
    }

    async fn clear(&self) -> Result<()> {
        self.accounts.write().await.clear();
        Ok(())
    }
}
