use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use transfer_ledger::application::ledger::Ledger;
use transfer_ledger::domain::account::{Account, AccountId};
use transfer_ledger::domain::instruction::{Instruction, OpKind};
use transfer_ledger::domain::ports::{AccountStoreBox, NotifierBox};
use transfer_ledger::error::LedgerError;
use transfer_ledger::infrastructure::in_memory::InMemoryAccountStore;
use transfer_ledger::infrastructure::notification::LogNotifier;
use transfer_ledger::interfaces::csv::account_writer::AccountWriter;
use transfer_ledger::interfaces::csv::instruction_reader::InstructionReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input instructions CSV file
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let accounts: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let notifier: NotifierBox = Box::new(LogNotifier::new());
    let ledger = Ledger::new(accounts, notifier);

    // Apply instructions
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = InstructionReader::new(file);
    for result in reader.instructions() {
        match result {
            Ok(instruction) => {
                if let Err(e) = apply(&ledger, instruction).await {
                    eprintln!("Error applying instruction: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading instruction: {e}");
            }
        }
    }

    // Output final state
    let accounts = ledger.accounts().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}

async fn apply(ledger: &Ledger, instruction: Instruction) -> Result<(), LedgerError> {
    match instruction.op {
        OpKind::Open => {
            let id = AccountId::new(instruction.account)?;
            let account = Account::open(id, instruction.amount)?;
            ledger.create_account(account).await
        }
        OpKind::Transfer => {
            let from = AccountId::new(instruction.account)?;
            let to = AccountId::new(instruction.counterparty.unwrap_or_default())?;
            ledger.transfer(&from, &to, instruction.amount).await
        }
    }
}
