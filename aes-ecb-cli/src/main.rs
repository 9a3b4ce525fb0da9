//! AES-ECB command-line tool
//!
//! Encrypts or decrypts a file with AES in ECB mode. The plaintext is padded
//! before encryption and the padding is checked and removed after decryption.

use aes_ecb::{
    decrypt_with_unpad, encrypt_with_pad, Aes, BlockCipher, EcbError, PaddingStyle, AES_BLOCK_SIZE,
};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/// Command-line arguments for the AES-ECB program.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// File holding the key as hex.
    #[arg(short, long, help = "File contains the AES key as hex (16, 24 or 32 bytes)")]
    key: PathBuf,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<PathBuf>,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Padding style.
    #[arg(short, long, default_value = "pkcs7", value_parser = parse_padding)]
    padding: PaddingStyle,

    /// Block size the plaintext is padded to.
    #[arg(long, default_value_t = AES_BLOCK_SIZE)]
    block_size: usize,

    /// Ciphertext is hex text rather than raw bytes.
    #[arg(long)]
    hex: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Pad, then encrypt.
    Encrypt,
    /// Decrypt, then unpad.
    Decrypt,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: invalid hex: {source}", path.display())]
    Hex {
        path: PathBuf,
        source: hex::FromHexError,
    },

    #[error(transparent)]
    Cipher(#[from] EcbError),
}

fn parse_padding(s: &str) -> Result<PaddingStyle, String> {
    s.parse().map_err(|e: EcbError| e.to_string())
}

/// Reads hex text from a file, ignoring whitespace and line breaks
fn read_hex_from_file(path: &Path) -> Result<Vec<u8>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    decode_hex(&content).map_err(|source| CliError::Hex {
        path: path.to_owned(),
        source,
    })
}

fn decode_hex(content: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let hex_string: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(hex_string)
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, data).map_err(|source| CliError::Io {
            path: path.to_owned(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(data)
            .map_err(|source| CliError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

/// Runs one encryption or decryption over in-memory buffers
fn process(cli: &Cli, input: &[u8], key: &[u8]) -> Result<Vec<u8>, CliError> {
    match cli.mode {
        OperationMode::Encrypt => {
            let ciphertext = encrypt_with_pad(input, key, cli.block_size, cli.padding)?;
            if cli.hex {
                Ok(hex::encode(ciphertext).into_bytes())
            } else {
                Ok(ciphertext)
            }
        }
        OperationMode::Decrypt => {
            let ciphertext = if cli.hex {
                let text = String::from_utf8_lossy(input);
                decode_hex(&text).map_err(|source| CliError::Hex {
                    path: cli.file.clone(),
                    source,
                })?
            } else {
                input.to_vec()
            };
            Ok(decrypt_with_unpad(&ciphertext, key, cli.block_size, cli.padding)?)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let key = read_hex_from_file(&cli.key)?;
    let key_bits = Aes::new(&key)?.key_bits();
    let input = read_input(&cli.file)?;
    log::info!(
        "{:?} {} bytes with AES-{}, {} padding, block size {}",
        cli.mode,
        input.len(),
        key_bits,
        cli.padding,
        cli.block_size
    );

    let output = process(cli, &input, &key)?;
    write_output(cli.output.as_deref(), &output)?;
    log::info!("Wrote {} bytes", output.len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
