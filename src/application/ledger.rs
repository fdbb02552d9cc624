use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::ports::{AccountStoreBox, NotifierBox};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;

/// The main entry point for the account ledger.
///
/// `Ledger` handles account creation, balance lookup and atomic peer-to-peer
/// transfers. A transfer takes exclusive access to exactly the two involved
/// accounts, always acquiring them in `AccountId` order, so transfers between
/// disjoint pairs run in parallel and opposite-direction transfers over the
/// same pair cannot deadlock each other.
pub struct Ledger {
    accounts: AccountStoreBox,
    notifier: NotifierBox,
}

impl Ledger {
    /// Creates a new `Ledger` instance.
    ///
    /// # Arguments
    ///
    /// * `accounts` - The store that owns all account state.
    /// * `notifier` - The collaborator informed after successful transfers.
    pub fn new(accounts: AccountStoreBox, notifier: NotifierBox) -> Self {
        Self { accounts, notifier }
    }

    /// Registers a new account with its opening balance.
    pub async fn create_account(&self, account: Account) -> Result<()> {
        let id = account.id().clone();
        self.accounts.create(account).await?;
        log::info!("account {id} created");
        Ok(())
    }

    /// Snapshot of a single account, if it exists.
    pub async fn account(&self, id: &AccountId) -> Result<Option<Account>> {
        self.accounts.get(id).await
    }

    /// Snapshots of all accounts, sorted by id for deterministic output.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let mut accounts = self.accounts.all().await?;
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(accounts)
    }

    /// Moves `amount` from `from` to `to` as a single atomic step.
    ///
    /// Validation order: positive amount, source exists, destination exists,
    /// distinct accounts, sufficient funds. A rejected transfer leaves both
    /// balances exactly as they were.
    pub async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> Result<()> {
        let amount = Amount::new(amount)?;

        let from_account = self
            .accounts
            .handle(from)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(from.clone()))?;
        let to_account = self
            .accounts
            .handle(to)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(to.clone()))?;

        if from == to {
            return Err(LedgerError::SameAccount);
        }

        {
            // Lock the lower-ordered id first. Every transfer acquires in the
            // same order, so no cycle of waiters can form.
            let (mut debit, mut credit) = if from < to {
                let debit = from_account.lock().await;
                let credit = to_account.lock().await;
                (debit, credit)
            } else {
                let credit = to_account.lock().await;
                let debit = from_account.lock().await;
                (debit, credit)
            };

            debit.withdraw(amount)?;
            credit.deposit(amount);
        }

        // Both locks are released; a slow notifier cannot stall the ledger.
        log::debug!("transferred {amount} from {from} to {to}");
        self.notifier
            .notify(from, &format!("Transferred {amount} to account {to}"))
            .await;
        self.notifier
            .notify(to, &format!("Received {amount} from account {from}"))
            .await;
        Ok(())
    }
}
