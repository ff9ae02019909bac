//! Command-line interface for `btcrypt`.
//!
//! Every value is hex, in the octet order the library expects: Bluetooth
//! order for everything except `gatt-hash` and `cmac`.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use btcrypt::Crypto;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Bluetooth AES-CMAC security functions.
#[derive(Parser)]
#[command(name = "btcrypt", version, author, about = "Bluetooth security function calculator")]
struct Cli {
    /// Log library decisions at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link key conversion h6(W, keyID).
    H6 {
        /// 16-byte W.
        #[arg(long, value_name = "HEX")]
        w: String,
        /// 4-byte key ID.
        #[arg(long, value_name = "HEX")]
        key_id: String,
    },
    /// Sign an ATT message; prints the 12-byte signature.
    Sign {
        /// 16-byte CSRK.
        #[arg(long, value_name = "HEX")]
        csrk: String,
        /// Message to sign (may be empty).
        #[arg(long, value_name = "HEX", default_value = "")]
        message: String,
        /// Sign counter.
        #[arg(long, default_value_t = 0)]
        counter: u32,
    },
    /// Verify a signed ATT PDU; exits with status 1 when it does not verify.
    Verify {
        /// 16-byte CSRK.
        #[arg(long, value_name = "HEX")]
        csrk: String,
        /// PDU with its trailing 12-byte signature.
        #[arg(long, value_name = "HEX")]
        pdu: String,
    },
    /// GATT database hash over one or more fragments.
    GattHash {
        /// Fragments, hashed as if concatenated.
        #[arg(value_name = "HEX", num_args = 0..)]
        fragments: Vec<String>,
    },
    /// SIRK encryption function.
    Sef {
        /// 16-byte K.
        #[arg(long, value_name = "HEX")]
        k: String,
        /// 16-byte SIRK.
        #[arg(long, value_name = "HEX")]
        sirk: String,
    },
    /// SIRK decryption function.
    Sdf {
        /// 16-byte K.
        #[arg(long, value_name = "HEX")]
        k: String,
        /// 16-byte encrypted SIRK.
        #[arg(long, value_name = "HEX")]
        enc_sirk: String,
    },
    /// Set member identity hash.
    Sih {
        /// 16-byte SIRK.
        #[arg(long, value_name = "HEX")]
        k: String,
        /// 3-byte random part.
        #[arg(long, value_name = "HEX")]
        r: String,
    },
    /// Random address hash.
    Ah {
        /// 16-byte IRK.
        #[arg(long, value_name = "HEX")]
        irk: String,
        /// 3-byte prand.
        #[arg(long, value_name = "HEX")]
        prand: String,
    },
    /// Security function e.
    E {
        /// 16-byte key.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// 16-byte plaintext.
        #[arg(long, value_name = "HEX")]
        plaintext: String,
    },
    /// Plain RFC 4493 AES-CMAC.
    Cmac {
        /// 16-byte key.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Message.
        #[arg(long, value_name = "HEX", default_value = "")]
        message: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let crypto = Crypto::new().context("create crypto context")?;
    match cli.command {
        Commands::H6 { w, key_id } => {
            print_hex(crypto.h6(&parse_hex("W", &w)?, &parse_hex("keyID", &key_id)?)?)
        }
        Commands::Sign {
            csrk,
            message,
            counter,
        } => {
            let signature = crypto.sign_att(
                &parse_hex("CSRK", &csrk)?,
                &parse_hex("message", &message)?,
                counter,
            )?;
            print_hex(signature)
        }
        Commands::Verify { csrk, pdu } => {
            return cmd_verify(&crypto, &csrk, &pdu);
        }
        Commands::GattHash { fragments } => {
            let fragments = fragments
                .iter()
                .enumerate()
                .map(|(i, f)| parse_hex("fragment", f).with_context(|| format!("fragment {i}")))
                .collect::<Result<Vec<_>>>()?;
            debug!(count = fragments.len(), "hashing fragments");
            print_hex(crypto.gatt_hash(&fragments))
        }
        Commands::Sef { k, sirk } => {
            print_hex(crypto.sef(&parse_hex("K", &k)?, &parse_hex("SIRK", &sirk)?)?)
        }
        Commands::Sdf { k, enc_sirk } => {
            print_hex(crypto.sdf(&parse_hex("K", &k)?, &parse_hex("EncSIRK", &enc_sirk)?)?)
        }
        Commands::Sih { k, r } => {
            print_hex(crypto.sih(&parse_hex("K", &k)?, &parse_hex("r", &r)?)?)
        }
        Commands::Ah { irk, prand } => {
            print_hex(crypto.ah(&parse_hex("IRK", &irk)?, &parse_hex("prand", &prand)?)?)
        }
        Commands::E { key, plaintext } => print_hex(
            crypto.e(&parse_hex("key", &key)?, &parse_hex("plaintext", &plaintext)?)?,
        ),
        Commands::Cmac { key, message } => print_hex(
            crypto.cmac(&parse_hex("key", &key)?, &parse_hex("message", &message)?)?,
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(crypto: &Crypto, csrk: &str, pdu: &str) -> Result<ExitCode> {
    let csrk = parse_hex("CSRK", csrk)?;
    let pdu = parse_hex("PDU", pdu)?;
    match crypto.check_att_sign(&csrk, &pdu) {
        Ok(()) => {
            println!("verified");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("not verified: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_hex(what: &str, hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn print_hex(value: impl AsRef<[u8]>) {
    println!("{}", hex::encode(value));
}
