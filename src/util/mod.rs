// Utility Module
// File persistence for keys, ciphertexts and messages

pub mod file_ops;

pub use file_ops::{
    ensure_keys_directory, read_ciphertext, read_plaintext, read_private_key, read_public_key,
    write_ciphertext, write_plaintext, write_private_key, write_public_key, FileError, FileResult,
};
