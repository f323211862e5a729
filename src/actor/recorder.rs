//! The recorder actor saves the accounts it receives through the
//! [AccountService].

use std::sync::{mpsc::Receiver, Arc};

use crate::{model::Account, service::AccountService};

/// The recorder actor is responsible for persisting the accounts read by
/// the reader actor.
pub struct Recorder {
    /// The account service.
    account_service: Arc<AccountService>,

    /// The account channel receiver.
    account_receiver: Receiver<Account>,
}

impl Recorder {
    /// Create a new recorder actor.
    pub fn new(account_service: Arc<AccountService>, account_receiver: Receiver<Account>) -> Self {
        Self {
            account_service,
            account_receiver,
        }
    }

    /// Run the recorder actor.
    /// The actor will NOT stop when a save fails but only log the error. It
    /// stops when the account channel is closed and returns the number of
    /// accounts saved.
    pub fn run(&self) -> usize {
        let mut saved = 0;

        for account in self.account_receiver.iter() {
            match self.account_service.save_account(account) {
                Ok(_) => saved += 1,
                Err(error) => log::info!("Error saving account: {}", error),
            }
        }

        saved
    }
}
