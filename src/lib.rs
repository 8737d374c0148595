//! Raw RSA built from scratch on `num-bigint`: Miller-Rabin prime search,
//! key pair construction and unpadded encryption of text packed into a
//! single integer, plus a small command-line shell that keeps keys and
//! ciphertexts in plain decimal text files.
//!
//! There is no padding, so this is for study only.

pub mod config;
pub mod rsa;
pub mod ui;
pub mod util;
