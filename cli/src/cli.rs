//! # CLI Interface
//!
//! Defines the command-line argument structure for `txcodec` using `clap`
//! derive. Byte arguments are hex; transactions are JSON records read from
//! a file or stdin.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Canonical transaction codec.
///
/// Encodes, decodes and inspects ledger transactions and addresses. Reads
/// and writes only its arguments, stdin and stdout.
#[derive(Parser, Debug)]
#[command(
    name = "txcodec",
    about = "Canonical transaction codec and address tool",
    version,
    propagate_version = true
)]
pub struct TxCodecCli {
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "TXCODEC_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "TXCODEC_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive or validate addresses.
    #[command(subcommand)]
    Address(AddressCommand),
    /// Encode a JSON transaction record to hex.
    Encode(EncodeArgs),
    /// Decode hex transaction bytes to a JSON record.
    Decode(HexArg),
    /// Print the type tag of encoded transaction bytes.
    Type(HexArg),
    /// Wrap encoded transaction bytes and a signature in a signed envelope.
    Attach(AttachArgs),
    /// Print the id of a JSON transaction record.
    Id(InputArgs),
    /// Assign a group id to a JSON array of transaction records.
    Group(InputArgs),
    /// Print the signed size of a JSON transaction record.
    Size(InputArgs),
    /// Print the ledger's named size and limit constants.
    Constants,
    /// Print version information and exit.
    Version,
}

/// `address` subcommands.
#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// Derive the address of a hex-encoded 32-byte public key.
    FromKey {
        /// Public key as 64 hex characters.
        public_key: String,
    },
    /// Validate an address and print its public key.
    Parse {
        /// 58-character address.
        address: String,
    },
}

/// A single hex-encoded byte argument.
#[derive(Args, Debug)]
pub struct HexArg {
    /// Hex-encoded bytes, with or without the `TX` prefix.
    pub bytes: String,
}

/// Arguments for the `encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Omit the `TX` domain prefix.
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `attach` subcommand.
#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Hex-encoded transaction bytes.
    pub transaction: String,
    /// Hex-encoded 64-byte signature.
    pub signature: String,
}

/// Where to read JSON input from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file to read. Reads stdin when omitted.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}
