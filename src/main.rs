use anyhow::Result;
use clap::Parser;

mod categories;
mod entry;
mod filespec;
mod importers;
mod textutil;

use crate::categories::MccTable;
use crate::filespec::FileSpec;

#[derive(Debug, Parser)]
/// Converts a transaction export from Cal (cal-online.co.il) to Ledger
/// entries.
struct Command {
    /// The JSON export to read from. "-" reads from stdin.
    #[arg(default_value = "-")]
    input: FileSpec,
    /// The ledger file to write to (overwrites any existing file). "-" writes
    /// to stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: FileSpec,
}

impl Command {
    fn run(&self) -> Result<()> {
        let json = filespec::read_file(&self.input)?;
        let converted = importers::cal::convert_document(&json, &MccTable)?;
        filespec::write_file(&self.output, &format!("{}\n", converted))
    }
}

fn main() {
    env_logger::init();
    let cmd = Command::parse();
    if let Err(err) = cmd.run() {
        println!("Error: {:#}", err);
        std::process::exit(1);
    }
}
