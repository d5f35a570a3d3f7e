mod command;
mod definitions;
mod options;
mod styles;

#[cfg(test)]
mod tests;

pub use command::parse_cli;
pub use definitions::CliArgs;
pub use options::{Command, OutputFormat};
