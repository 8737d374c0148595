// Command-line front end
// Argument parsing and the three file-level operations the menu also uses

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;

use crate::config::{Config, DEFAULT_KEYS_DIR};
use crate::rsa::{
    decrypt_with, encrypt_with, generate_keypair_with, Encoding, RsaKeyPair, DEFAULT_BIT_LENGTH,
    DEFAULT_PUBLIC_EXPONENT, DEFAULT_ROUNDS,
};
use crate::util::{
    ensure_keys_directory, read_ciphertext, read_plaintext, read_private_key, read_public_key,
    write_ciphertext, write_plaintext, write_private_key, write_public_key,
};

use super::menu::run_menu;

/// Raw RSA key generation, encryption and decryption
#[derive(Parser, Debug)]
#[command(name = "textbook-rsa", version, about)]
pub struct Cli {
    /// Directory key files are read from and written to
    #[arg(long, global = true, default_value = DEFAULT_KEYS_DIR)]
    pub keys_dir: PathBuf,

    /// Pack one byte per code point instead of UTF-8
    #[arg(long, global = true)]
    pub legacy_encoding: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a key pair and save both halves in the key directory
    Keygen {
        /// File name for the public key
        public_key: String,
        /// File name for the private key
        private_key: String,
        /// Size of each prime in bits
        #[arg(short, long, default_value_t = DEFAULT_BIT_LENGTH)]
        bits: u64,
        /// Public exponent
        #[arg(short, long, default_value_t = DEFAULT_PUBLIC_EXPONENT)]
        exponent: u64,
        /// Miller-Rabin rounds per prime candidate
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
    },
    /// Encrypt a text file with a public key
    Encrypt {
        input: PathBuf,
        output: PathBuf,
        /// Public key file name in the key directory
        public_key: String,
    },
    /// Decrypt a ciphertext file with a private key
    Decrypt {
        input: PathBuf,
        output: PathBuf,
        /// Private key file name in the key directory
        private_key: String,
    },
    /// Interactive menu (the default)
    Menu,
}

impl Cli {
    pub fn config(&self) -> Config {
        let encoding = if self.legacy_encoding {
            Encoding::Legacy
        } else {
            Encoding::Utf8
        };
        let config = Config::default()
            .with_keys_dir(&self.keys_dir)
            .with_encoding(encoding);

        match &self.command {
            Some(Command::Keygen { bits, exponent, rounds, .. }) => config
                .with_bit_length(*bits)
                .with_public_exponent(*exponent)
                .with_rounds(*rounds),
            _ => config,
        }
    }
}

/// Generate a key pair and store it as `keys_dir/public_key_file` and
/// `keys_dir/private_key_file`
pub fn generate_keys(
    config: &Config,
    public_key_file: &str,
    private_key_file: &str,
) -> Result<RsaKeyPair> {
    let keypair = generate_keypair_with(&config.keygen(), &mut OsRng)
        .context("key generation failed")?;

    ensure_keys_directory(&config.keys_dir)?;
    write_public_key(&config.key_path(public_key_file), &keypair.public_key)?;
    write_private_key(&config.key_path(private_key_file), &keypair.private_key)?;

    Ok(keypair)
}

/// Encrypt the text in `input` and write the decimal ciphertext to `output`
pub fn encrypt_file(
    config: &Config,
    input: &Path,
    output: &Path,
    public_key_file: &str,
) -> Result<()> {
    let public_key = read_public_key(&config.key_path(public_key_file))?;
    let message = read_plaintext(input)?;

    let ciphertext = encrypt_with(&message, &public_key, config.encoding)
        .with_context(|| format!("cannot encrypt {}", input.display()))?;

    write_ciphertext(output, &ciphertext)?;
    Ok(())
}

/// Decrypt the ciphertext in `input` and write the recovered text to `output`
pub fn decrypt_file(
    config: &Config,
    input: &Path,
    output: &Path,
    private_key_file: &str,
) -> Result<()> {
    let private_key = read_private_key(&config.key_path(private_key_file))?;
    let ciphertext = read_ciphertext(input)?;

    let message = decrypt_with(&ciphertext, &private_key, config.encoding)
        .with_context(|| format!("cannot decrypt {}", input.display()))?;

    write_plaintext(output, &message)?;
    Ok(())
}

/// Run whatever the command line asked for
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();

    match cli.command {
        Some(Command::Keygen { public_key, private_key, .. }) => {
            generate_keys(&config, &public_key, &private_key)?;
            println!("Keys generated and saved.");
        }
        Some(Command::Encrypt { input, output, public_key }) => {
            encrypt_file(&config, &input, &output, &public_key)?;
            println!("Message encrypted.");
        }
        Some(Command::Decrypt { input, output, private_key }) => {
            decrypt_file(&config, &input, &output, &private_key)?;
            println!("Message decrypted.");
        }
        Some(Command::Menu) | None => {
            let stdin = io::stdin();
            run_menu(&config, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
