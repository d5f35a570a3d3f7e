//! Command-line surface of the `cyrus` binary.
//!
//! Every configuration flag is optional so that only flags the user actually
//! passed reach the command-line tier; built-in defaults live with the other
//! settings defaults.

mod args;
mod output;

pub use args::{CliArgs, Command, OutputFormat, parse_cli};
pub use output::{format_entries_json, format_settings_json, print_entries, print_settings};
