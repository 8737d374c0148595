// Application Configuration
// Defaults for key generation, key storage and message encoding

use std::path::{Path, PathBuf};

use crate::rsa::{
    Encoding, KeyGenConfig, DEFAULT_BIT_LENGTH, DEFAULT_PUBLIC_EXPONENT, DEFAULT_ROUNDS,
};

/// Directory key files are stored in unless overridden
pub const DEFAULT_KEYS_DIR: &str = "keys";

/// Settings shared by the menu and the subcommands
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub keys_dir: PathBuf,
    pub bit_length: u64,
    pub public_exponent: u64,
    pub rounds: u32,
    pub encoding: Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keys_dir: PathBuf::from(DEFAULT_KEYS_DIR),
            bit_length: DEFAULT_BIT_LENGTH,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            rounds: DEFAULT_ROUNDS,
            encoding: Encoding::default(),
        }
    }
}

impl Config {
    pub fn with_keys_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.keys_dir = dir.into();
        self
    }

    pub fn with_bit_length(mut self, bit_length: u64) -> Self {
        self.bit_length = bit_length;
        self
    }

    pub fn with_public_exponent(mut self, public_exponent: u64) -> Self {
        self.public_exponent = public_exponent;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Location of a named key file inside the key directory
    pub fn key_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.keys_dir.join(name)
    }

    /// The subset of settings the key generator needs
    pub fn keygen(&self) -> KeyGenConfig {
        KeyGenConfig::default()
            .with_bit_length(self.bit_length)
            .with_public_exponent(self.public_exponent)
            .with_rounds(self.rounds)
    }
}
