use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use thiserror::Error;

use crate::model::{Account, AccountId};
use crate::Result;

/// Account repository trait.
///
/// This trait is the persistence collaborator of the account service. A
/// missing account is not an error, it must be reported as `None`. Errors are
/// reserved to storage failures.
pub trait AccountRepository {
    /// Get every stored account.
    fn find_all(&self) -> Result<Vec<Account>>;

    /// Get an account by its identifier.
    fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>>;

    /// Add or update an account and return the stored representation.
    /// An account without identifier is given one.
    fn save(&self, account: Account) -> Result<Account>;

    /// Count the stored accounts.
    fn count(&self) -> Result<u64>;
}

/// Repository related errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A thread panicked while holding the store lock.
    #[error("Account store lock is poisoned.")]
    Poisoned,
}

/// A simple in-memory account repository.
///
/// Accounts are kept ordered by identifier behind a read-write lock so the
/// repository can be shared amongst threads.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<BTreeMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<AccountId, Account>>> {
        self.accounts
            .read()
            .map_err(|_| anyhow!(RepositoryError::Poisoned))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<AccountId, Account>>> {
        self.accounts
            .write()
            .map_err(|_| anyhow!(RepositoryError::Poisoned))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn save(&self, mut account: Account) -> Result<Account> {
        let id = account.id.get_or_insert_with(AccountId::generate).clone();
        self.write()?.insert(id, account.clone());

        Ok(account)
    }

    fn count(&self) -> Result<u64> {
        Ok(self.read()?.len() as u64)
    }
}
