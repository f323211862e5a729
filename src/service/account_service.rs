use log::debug;

use crate::adapter::AccountRepository;
use crate::model::{Account, AccountId};
use crate::Result;

/// The [AccountService] exposes the query and aggregation operations over the
/// persisted accounts.
///
/// The service holds no state besides its repository and takes no lock: it
/// can be shared amongst threads in an `Arc` as long as the repository is
/// `Sync + Send`. Every repository error is returned to the caller as is.
pub struct AccountService {
    repository: Box<dyn AccountRepository + Sync + Send>,
}

impl AccountService {
    /// Create a new account service on top of the given repository.
    pub fn new(repository: impl AccountRepository + Sync + Send + 'static) -> Self {
        Self {
            repository: Box::new(repository),
        }
    }

    /// Get every account, in the order the repository returns them.
    pub fn find_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.find_all()
    }

    /// Get the account with the given identifier.
    ///
    /// ```
    /// use account_keeper::adapter::InMemoryAccountRepository;
    /// use account_keeper::model::{Account, AccountId};
    /// use account_keeper::service::AccountService;
    ///
    /// let service = AccountService::new(InMemoryAccountRepository::default());
    ///
    /// // If the account does not exist, None is returned.
    /// assert!(service.find_account_by_id(&AccountId::from("A1")).unwrap().is_none());
    ///
    /// // If the account exists, it is returned.
    /// service.save_account(Account::with_id("A1", 100.0)).unwrap();
    /// let account = service.find_account_by_id(&AccountId::from("A1")).unwrap().unwrap();
    ///
    /// assert_eq!(account.balance, 100.0);
    /// ```
    pub fn find_account_by_id(&self, id: &AccountId) -> Result<Option<Account>> {
        self.repository.find_by_id(id)
    }

    /// Insert or update the given account and return what was stored. The
    /// returned account always carries an identifier.
    ///
    /// ```
    /// use account_keeper::adapter::InMemoryAccountRepository;
    /// use account_keeper::model::Account;
    /// use account_keeper::service::AccountService;
    ///
    /// let service = AccountService::new(InMemoryAccountRepository::default());
    /// let saved = service.save_account(Account::new(42.0)).unwrap();
    /// let id = saved.id.clone().unwrap();
    ///
    /// assert_eq!(service.find_account_by_id(&id).unwrap(), Some(saved));
    /// ```
    pub fn save_account(&self, account: Account) -> Result<Account> {
        let account = self.repository.save(account)?;
        debug!("Account {:?} saved.", account.id);

        Ok(account)
    }

    /// Count the persisted accounts.
    pub fn count_accounts(&self) -> Result<u64> {
        self.repository.count()
    }

    /// Sum the balances of every account.
    ///
    /// This fetches the whole collection and adds the balances in fetch order
    /// starting from zero. A store holding many accounts should rather compute
    /// the total itself.
    ///
    /// ```
    /// use account_keeper::adapter::InMemoryAccountRepository;
    /// use account_keeper::model::Account;
    /// use account_keeper::service::AccountService;
    ///
    /// let service = AccountService::new(InMemoryAccountRepository::default());
    /// assert_eq!(service.sum_balances().unwrap(), 0.0);
    ///
    /// service.save_account(Account::with_id("A1", 100.0)).unwrap();
    /// service.save_account(Account::with_id("A2", 50.5)).unwrap();
    ///
    /// assert_eq!(service.sum_balances().unwrap(), 150.5);
    /// ```
    pub fn sum_balances(&self) -> Result<f64> {
        let total = self
            .repository
            .find_all()?
            .iter()
            .map(|account| account.balance)
            .fold(0.0, |total, balance| total + balance);

        Ok(total)
    }
}
