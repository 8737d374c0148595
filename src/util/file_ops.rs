// File Operations for RSA Keys and Messages
// Reads and writes the plain-text key, ciphertext and message files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::rsa::{Ciphertext, RsaBigInt, RsaError, RsaPrivateKey, RsaPublicKey};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("cannot access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: line {line} is missing", .path.display())]
    MissingLine { path: PathBuf, line: usize },

    #[error("{}: line {line} is not a decimal integer", .path.display())]
    InvalidNumber { path: PathBuf, line: usize },

    #[error("{}: invalid key", .path.display())]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: RsaError,
    },
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| FileError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a file and parse its first `count` lines as decimal integers
fn read_numbers(path: &Path, count: usize) -> FileResult<Vec<RsaBigInt>> {
    let contents = fs::read_to_string(path).map_err(io_error(path))?;
    let mut lines = contents.lines();

    (1..=count)
        .map(|line| {
            let text = lines.next().ok_or_else(|| FileError::MissingLine {
                path: path.to_path_buf(),
                line,
            })?;
            RsaBigInt::from_str(text.trim()).map_err(|_| FileError::InvalidNumber {
                path: path.to_path_buf(),
                line,
            })
        })
        .collect()
}

/// Write integers one per line, each followed by a newline
fn write_numbers(path: &Path, numbers: &[&RsaBigInt]) -> FileResult<()> {
    let contents: String = numbers.iter().map(|n| format!("{}\n", n)).collect();
    fs::write(path, contents).map_err(io_error(path))
}

fn read_pair(path: &Path) -> FileResult<(RsaBigInt, RsaBigInt)> {
    let mut numbers = read_numbers(path, 2)?.into_iter();
    match (numbers.next(), numbers.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(FileError::MissingLine {
            path: path.to_path_buf(),
            line: 2,
        }),
    }
}

/// Save a public key as two lines: e, then n
pub fn write_public_key(path: &Path, key: &RsaPublicKey) -> FileResult<()> {
    write_numbers(path, &[&key.e, &key.n])
}

/// Load and validate a public key written by `write_public_key`
pub fn read_public_key(path: &Path) -> FileResult<RsaPublicKey> {
    let (e, n) = read_pair(path)?;
    RsaPublicKey::new(e, n).map_err(|source| FileError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a private key as two lines: d, then n
pub fn write_private_key(path: &Path, key: &RsaPrivateKey) -> FileResult<()> {
    write_numbers(path, &[&key.d, &key.n])
}

/// Load and validate a private key written by `write_private_key`
pub fn read_private_key(path: &Path) -> FileResult<RsaPrivateKey> {
    let (d, n) = read_pair(path)?;
    RsaPrivateKey::new(d, n).map_err(|source| FileError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a ciphertext as a single decimal line
pub fn write_ciphertext(path: &Path, ciphertext: &Ciphertext) -> FileResult<()> {
    write_numbers(path, &[ciphertext])
}

pub fn read_ciphertext(path: &Path) -> FileResult<Ciphertext> {
    let mut numbers = read_numbers(path, 1)?;
    numbers.pop().ok_or_else(|| FileError::MissingLine {
        path: path.to_path_buf(),
        line: 1,
    })
}

/// Read a whole plaintext file as UTF-8
pub fn read_plaintext(path: &Path) -> FileResult<String> {
    fs::read_to_string(path).map_err(io_error(path))
}

/// Write plaintext exactly as given, without a trailing newline
pub fn write_plaintext(path: &Path, text: &str) -> FileResult<()> {
    fs::write(path, text).map_err(io_error(path))
}

/// Create the key directory if it does not exist yet
pub fn ensure_keys_directory(dir: &Path) -> FileResult<()> {
    fs::create_dir_all(dir).map_err(io_error(dir))
}
