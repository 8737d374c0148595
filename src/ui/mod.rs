// Command-line shell: subcommands and the interactive menu

pub mod app;
pub mod menu;

pub use app::{decrypt_file, encrypt_file, generate_keys, run, Cli, Command};
pub use menu::run_menu;
