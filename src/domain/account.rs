use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::ops::{AddAssign, SubAssign};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Unique, immutable account identifier.
///
/// The derived `Ord` is the total order used to acquire account locks in a
/// globally consistent sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(LedgerError::Validation(
                "account id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a monetary balance with exact decimal precision.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for financial calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Balance(pub Decimal);

/// Represents a positive monetary amount for transfers.
///
/// Ensures that transfer amounts are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl AddAssign<Amount> for Balance {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.value();
    }
}

impl SubAssign<Amount> for Balance {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.value();
    }
}

/// An account handle that can be locked for the duration of one operation.
pub type SharedAccount = Arc<Mutex<Account>>;

/// A ledger entry: a unique id plus a non-negative balance.
///
/// The balance is only reachable through `deposit` and `withdraw`, so it is
/// never observably negative between operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    balance: Balance,
}

impl Account {
    /// Opens an account with the given starting balance.
    pub fn open(id: AccountId, initial_balance: Decimal) -> Result<Self> {
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "opening balance must not be negative".to_string(),
            ));
        }
        Ok(Self {
            id,
            balance: Balance::new(initial_balance),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Credits the account.
    pub fn deposit(&mut self, amount: Amount) {
        self.balance += amount;
    }

    /// Debits the account if funds suffice, leaving the balance untouched
    /// otherwise.
    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        if self.balance.value() < amount.value() {
            return Err(LedgerError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }
}
