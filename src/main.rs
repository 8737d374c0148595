use std::process;

use clap::Parser;

fn main() {
    let cli = textbook_rsa::ui::Cli::parse();
    if let Err(e) = textbook_rsa::ui::run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
