// Interactive menu
// Prompts for file names and dispatches to the operations in app.rs

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::Config;

use super::app::{decrypt_file, encrypt_file, generate_keys};

const MENU: &str = "Choose an operation:\n1. Generate keys\n2. Encrypt\n3. Decrypt\n0. Exit";

/// Print `question`, then read one line without its line ending.
/// None means the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    if !question.is_empty() {
        write!(out, "{}: ", question)?;
        out.flush()?;
    }

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read several answers in a row, stopping early at end of input
fn prompt_all<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    out: &mut W,
    questions: [&str; N],
) -> io::Result<Option<[String; N]>> {
    let mut answers: [String; N] = std::array::from_fn(|_| String::new());
    for (answer, question) in answers.iter_mut().zip(questions) {
        match prompt(input, out, question)? {
            Some(text) => *answer = text,
            None => return Ok(None),
        }
    }
    Ok(Some(answers))
}

/// Loop over the menu until the user picks 0 or input runs out.
/// A failed operation is reported and the menu is shown again.
pub fn run_menu<R: BufRead, W: Write>(config: &Config, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;

        let Some(choice) = prompt(&mut input, &mut out, "")? else {
            break;
        };

        let result = match choice.trim().parse::<u32>() {
            Ok(0) => break,
            Ok(1) => {
                let Some([public, private]) = prompt_all(
                    &mut input,
                    &mut out,
                    ["Public key file name", "Private key file name"],
                )?
                else {
                    break;
                };
                generate_keys(config, &public, &private).map(|_| "Keys generated and saved.")
            }
            Ok(2) => {
                let Some([source, target, key]) = prompt_all(
                    &mut input,
                    &mut out,
                    ["File to encrypt", "Output file for the ciphertext", "Public key file name"],
                )?
                else {
                    break;
                };
                encrypt_file(config, Path::new(&source), Path::new(&target), &key)
                    .map(|_| "Message encrypted.")
            }
            Ok(3) => {
                let Some([source, target, key]) = prompt_all(
                    &mut input,
                    &mut out,
                    ["File to decrypt", "Output file for the plaintext", "Private key file name"],
                )?
                else {
                    break;
                };
                decrypt_file(config, Path::new(&source), Path::new(&target), &key)
                    .map(|_| "Message decrypted.")
            }
            _ => {
                writeln!(out, "Invalid choice. Try again.")?;
                continue;
            }
        };

        match result {
            Ok(message) => writeln!(out, "{}", message)?,
            Err(e) => writeln!(out, "Error: {:#}", e)?,
        }
    }

    writeln!(out, "Exiting.")?;
    Ok(())
}
