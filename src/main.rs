use std::{
    io::{stdout, BufReader, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{anyhow, bail};
use clap::Parser;
use log::{debug, error, info};

use account_keeper::{
    actor::{AccountExporter, Reader, Recorder},
    adapter::InMemoryAccountRepository,
    model::{Account, AccountId},
    service::AccountService,
    Result,
};

/// Command line arguments
#[derive(Debug, Parser)]
struct CLIArguments {
    /// The path to the CSV file holding the accounts (`id,balance`).
    csv_file: PathBuf,

    /// Look up the account with this identifier.
    #[arg(long)]
    find: Option<String>,

    /// Export every account as CSV after the report.
    #[arg(long)]
    export: bool,
}

struct Application {
    csv_file: PathBuf,
    find: Option<AccountId>,
    export: bool,
}

impl Application {
    fn new(arguments: CLIArguments) -> Result<Self> {
        let csv_file = arguments.csv_file;
        if !csv_file.exists() {
            bail!("CSV file does not exist: '{:?}'.", csv_file.display());
        }
        if !csv_file.is_file() {
            bail!("CSV file is not a file: '{:?}'.", csv_file.canonicalize());
        }
        let this = Self {
            csv_file,
            find: arguments.find.map(AccountId::from),
            export: arguments.export,
        };

        Ok(this)
    }

    fn run(&self) -> Result<()> {
        info!("Starting ACCOUNT_KEEPER version {}", env!("CARGO_PKG_VERSION"));
        debug!("Reading CSV file: '{:?}'.", self.csv_file.canonicalize());

        // Accounts read from the file are sent to the recorder actor.
        let (account_sender, account_receiver) = std::sync::mpsc::channel::<Account>();
        let buffer = BufReader::new(std::fs::File::open(&self.csv_file)?);

        let account_service = Arc::new(AccountService::new(InMemoryAccountRepository::default()));
        let recorder_actor = Recorder::new(account_service.clone(), account_receiver);
        let recorder_handler = std::thread::spawn(move || recorder_actor.run());

        let reader_actor = Reader::new(account_sender, Box::new(buffer));
        let reader_handler = std::thread::spawn(move || reader_actor.run());

        reader_handler
            .join()
            .map_err(|_| anyhow!("Reader thread panicked"))??;
        let saved = recorder_handler
            .join()
            .map_err(|_| anyhow!("Recorder thread panicked"))?;
        info!("{} accounts loaded.", saved);

        self.report(&account_service)?;

        if self.export {
            AccountExporter::new(account_service, Box::new(stdout())).run()?;
        }

        Ok(())
    }

    fn report(&self, account_service: &AccountService) -> Result<()> {
        let mut out = stdout().lock();
        writeln!(out, "accounts: {}", account_service.count_accounts()?)?;
        writeln!(out, "balance total: {}", account_service.sum_balances()?)?;

        if let Some(id) = &self.find {
            match account_service.find_account_by_id(id)? {
                Some(account) => writeln!(out, "account '{}': {}", id, account.balance)?,
                None => writeln!(out, "account '{}' not found", id)?,
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let arguments = CLIArguments::parse();
    env_logger::init();
    let application = Application::new(arguments)?;

    let result = application.run();

    match &result {
        Ok(_) => {
            info!("ACCOUNT_KEEPER completed successfully");
        }
        Err(error) => {
            error!("ACCOUNT_KEEPER failed with error: {}", error);
        }
    };

    result
}
