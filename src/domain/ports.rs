use super::account::{Account, AccountId, SharedAccount};
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for accounts.
///
/// The store owns every `Account`; callers see snapshots (`get`, `all`) or a
/// lockable handle (`handle`) that must not outlive the operation it was
/// obtained for.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account keyed by its id. Exactly one of any set of
    /// concurrent creates for the same id succeeds.
    async fn create(&self, account: Account) -> Result<()>;
    /// Snapshot of the current account state, if present.
    async fn get(&self, id: &AccountId) -> Result<Option<Account>>;
    /// Lockable handle to an account, if present.
    async fn handle(&self, id: &AccountId) -> Result<Option<SharedAccount>>;
    /// Snapshots of every account.
    async fn all(&self) -> Result<Vec<Account>>;
    /// Removes all accounts. Test-harness reset, not a production flow.
    async fn clear(&self) -> Result<()>;
}

/// Outbound notification port. Fire and forget: delivery failures are the
/// adapter's concern and never surface to the ledger.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, account: &AccountId, message: &str);
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotifierBox = Box<dyn Notifier>;
