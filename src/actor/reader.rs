//! Reader actor
//!
//! The reader actor is responsible for reading account data from a CSV file.
//! The actor reads the file record by record and sends the accounts to the
//! recorder actor through a channel.

use std::{io::Read, sync::mpsc::Sender};

use csv::ReaderBuilder;
use log::debug;

use crate::model::Account;

/// Reader actor.
pub struct Reader {
    /// The account channel sender to send the parsed accounts.
    account_sender: Sender<Account>,
    reader: Box<dyn Read + Sync + Send>,
}

impl Reader {
    /// Create a new reader actor.
    pub fn new(account_sender: Sender<Account>, reader: Box<dyn Read + Sync + Send>) -> Self {
        Self {
            account_sender,
            reader,
        }
    }

    /// Run the reader actor.
    /// Records that cannot be parsed are logged and skipped. The channel is
    /// closed when the actor returns.
    pub fn run(self) -> crate::Result<()> {
        debug!("Reader Actor started");
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(self.reader);

        for result in csv_reader.deserialize() {
            let account: Account = match result {
                Err(error) => {
                    log::info!("Error reading CSV record: {}", error);
                    continue;
                }
                Ok(account) => account,
            };

            self.account_sender.send(account)?;
        }
        debug!("Reader Actor stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc::channel;

    fn run_reader(data: &'static str) -> Vec<Account> {
        let (tx, rx) = channel();
        let actor = Reader::new(tx, Box::new(data.as_bytes()));
        let handler = std::thread::spawn(move || actor.run());

        assert!(handler.join().unwrap().is_ok());
        rx.iter().collect()
    }

    #[test]
    fn simple_ok_sample() {
        let data = r#"id, balance
A1, 100.0
A2, 50.5
, 3"#;
        let accounts = run_reader(data);

        assert_eq!(
            accounts,
            vec![
                Account::with_id("A1", 100.0),
                Account::with_id("A2", 50.5),
                Account::new(3.0),
            ]
        );
    }

    #[test]
    fn test_empty_lines_and_extra_spaces() {
        let data = r#"id, balance
   A1 , 1.0

A2, -2.0

"#;
        assert_eq!(run_reader(data).len(), 2);
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let data = r#"id, balance
A1, 1.0
A2, lots
A3
A4, 4"#;
        let accounts = run_reader(data);

        assert_eq!(
            accounts,
            vec![Account::with_id("A1", 1.0), Account::with_id("A4", 4.0)]
        );
    }
}
