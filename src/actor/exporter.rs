//! # Account Exporter Actor
//!
//! This module provides the implementation of the Account Exporter Actor.

use std::{io::Write, sync::Arc};

use log::debug;

use crate::{service::AccountService, Result};

/// The account exporter actor.
pub struct AccountExporter {
    /// The account service.
    account_service: Arc<AccountService>,

    /// A Write interface to export the CSV to
    writer: Box<dyn Write + Sync + Send>,
}

impl AccountExporter {
    /// Create a new account exporter actor.
    pub fn new(account_service: Arc<AccountService>, writer: Box<dyn Write + Sync + Send>) -> Self {
        Self {
            account_service,
            writer,
        }
    }

    /// Run the account exporter actor.
    /// The actor writes every account as a CSV record, headers first.
    pub fn run(self) -> Result<()> {
        debug!("Account Exporter Actor started");

        let accounts = self.account_service.find_all_accounts()?;

        let mut writer = csv::Writer::from_writer(self.writer);
        for account in accounts {
            writer.serialize(account)?;
        }

        writer.flush()?;

        debug!("Account Exporter Actor stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{adapter::InMemoryAccountRepository, model::Account};

    /// A writer that keeps what was written so the test can read it back.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_account_exporter_actor() {
        let account_service = Arc::new(AccountService::new(InMemoryAccountRepository::default()));
        account_service
            .save_account(Account::with_id("A2", 50.5))
            .unwrap();
        account_service
            .save_account(Account::with_id("A1", -1.25))
            .unwrap();
        let buffer = SharedBuffer::default();
        let account_exporter = AccountExporter::new(account_service, Box::new(buffer.clone()));

        account_exporter.run().unwrap();
        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();

        assert_eq!(output, "id,balance\nA1,-1.25\nA2,50.5\n");
    }

    #[test]
    fn test_export_nothing() {
        let account_service = Arc::new(AccountService::new(InMemoryAccountRepository::default()));
        let buffer = SharedBuffer::default();

        AccountExporter::new(account_service, Box::new(buffer.clone()))
            .run()
            .unwrap();

        assert!(buffer.0.lock().unwrap().is_empty());
    }
}
