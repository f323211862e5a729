use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque account identifier.
///
/// Identifiers are plain strings. They are either chosen by the caller or
/// assigned by the repository when an account is saved for the first time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Generate a fresh random identifier.
    ///
    /// ```
    /// use account_keeper::model::AccountId;
    ///
    /// assert_ne!(AccountId::generate(), AccountId::generate());
    /// ```
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
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

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted account: an identifier and a balance.
///
/// No invariant is enforced on the balance, it may be negative or zero. An
/// account without identifier has never been saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier, `None` until the account is saved.
    pub id: Option<AccountId>,

    /// The account balance.
    pub balance: f64,
}

impl Account {
    /// Creates an account that has not been saved yet.
    ///
    /// ```
    /// use account_keeper::model::Account;
    ///
    /// let account = Account::new(12.5);
    ///
    /// assert!(account.id.is_none());
    /// assert_eq!(account.balance, 12.5);
    /// ```
    pub fn new(balance: f64) -> Self {
        Self { id: None, balance }
    }

    /// Creates an account with the given identifier.
    ///
    /// ```
    /// use account_keeper::model::{Account, AccountId};
    ///
    /// let account = Account::with_id("A1", 100.0);
    ///
    /// assert_eq!(account.id, Some(AccountId::from("A1")));
    /// ```
    pub fn with_id(id: impl Into<AccountId>, balance: f64) -> Self {
        Self {
            id: Some(id.into()),
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    pub use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = AccountId::generate();

        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_id_display() {
        let id = AccountId::from("A1".to_string());

        assert_eq!(id.to_string(), "A1");
        assert_eq!(id.as_ref(), "A1");
    }

    #[test]
    fn test_ids_are_ordered() {
        assert!(AccountId::from("A1") < AccountId::from("A2"));
    }

    #[test]
    fn test_csv_deserialization_with_empty_id() {
        let data = "id,balance\n,3.5\nA1,-2\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let accounts: Vec<Account> = reader
            .deserialize::<Account>()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(accounts, vec![Account::new(3.5), Account::with_id("A1", -2.0)]);
    }

    #[test]
    fn test_csv_serialization() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(Account::with_id("A2", 50.5)).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(output, "id,balance\nA2,50.5\n");
    }
}
