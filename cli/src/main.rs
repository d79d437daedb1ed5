// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # txcodec
//!
//! Entry point for the `txcodec` binary. Parses CLI arguments, initializes
//! logging and runs one codec operation.
//!
//! - `address` derives an address from a key, or validates one
//! - `encode` turns a JSON record into canonical hex
//! - `decode` turns canonical hex into a JSON record
//! - `type` sniffs the type tag of encoded bytes
//! - `attach` builds a signed envelope
//! - `id`, `group` and `size` compute ids, group ids and signed size
//! - `constants` lists the ledger's size and limit constants
//! - `version` prints build version information

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;

use ledger_transact::api;
use ledger_transact::config::LedgerConstant;
use ledger_transact::transaction::{Transaction, TransactionRecord};

use cli::{AddressCommand, Commands, TxCodecCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = TxCodecCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    match cli.command {
        Commands::Address(AddressCommand::FromKey { public_key }) => {
            let key = decode_hex("public key", &public_key)?;
            println!("{}", api::address_from_pub_key(&key)?);
        }
        Commands::Address(AddressCommand::Parse { address }) => {
            let parsed = api::address_from_string(address.trim())?;
            println!("{}", hex::encode(parsed.as_bytes()));
        }
        Commands::Encode(args) => {
            let tx = read_transaction(args.input.input.as_deref())?;
            let bytes = if args.raw {
                api::encode_transaction_raw(&tx)?
            } else {
                api::encode_transaction(&tx)?
            };
            println!("{}", hex::encode(bytes));
        }
        Commands::Decode(arg) => {
            let bytes = decode_hex("transaction", &arg.bytes)?;
            let tx = api::decode_transaction(&bytes)?;
            print_json(&TransactionRecord::from(tx))?;
        }
        Commands::Type(arg) => {
            let bytes = decode_hex("transaction", &arg.bytes)?;
            println!("{}", api::get_encoded_transaction_type(&bytes)?);
        }
        Commands::Attach(args) => {
            let tx = decode_hex("transaction", &args.transaction)?;
            let sig = decode_hex("signature", &args.signature)?;
            println!("{}", hex::encode(api::attach_signature(&tx, &sig)?));
        }
        Commands::Id(args) => {
            let tx = read_transaction(args.input.as_deref())?;
            println!("{}", api::transaction_id(&tx)?);
        }
        Commands::Group(args) => {
            let json = read_input(args.input.as_deref())?;
            let records: Vec<TransactionRecord> =
                serde_json::from_str(&json).context("input is not a JSON array of transactions")?;
            let txs = records
                .into_iter()
                .map(Transaction::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            let grouped = api::group_transactions(&txs)?;
            let out: Vec<TransactionRecord> =
                grouped.into_iter().map(TransactionRecord::from).collect();
            print_json(&out)?;
        }
        Commands::Size(args) => {
            let tx = read_transaction(args.input.as_deref())?;
            println!("{}", api::estimate_transaction_size(&tx)?);
        }
        Commands::Constants => {
            for constant in LedgerConstant::ALL {
                println!("{:<30}{}", constant.as_str(), api::get_constant(constant));
            }
        }
        Commands::Version => print_version(),
    }
    Ok(())
}

/// Reads a JSON file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_transaction(path: Option<&Path>) -> Result<Transaction> {
    let json = read_input(path)?;
    let record: TransactionRecord =
        serde_json::from_str(&json).context("input is not a JSON transaction record")?;
    tracing::debug!(tx_type = %record.transaction_type, "read transaction record");
    Ok(Transaction::try_from(record)?)
}

fn decode_hex(what: &str, input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if trimmed.is_empty() {
        bail!("{what} is empty");
    }
    hex::decode(trimmed).with_context(|| format!("{what} is not valid hex"))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_version() {
    println!("txcodec         {}", env!("CARGO_PKG_VERSION"));
    println!("ledger-transact {}", ledger_transact::config::CODEC_VERSION);
}
