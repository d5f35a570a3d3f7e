//! Layered configuration resolution.
//!
//! Values come from four tiers of increasing precedence: built-in defaults,
//! the `cyrus.toml` configuration file, `CYRUS_*` environment variables and
//! command-line flags. [`load`] is the primary entry point and returns an
//! immutable [`Settings`] snapshot together with any non-fatal diagnostics.

mod builder;
mod diagnostics;
mod env;
mod file;
pub mod keys;
mod loader;
mod resolved;
mod sources;
mod store;
mod summary;
mod tier;
mod value;

pub use builder::SettingsBuilder;
pub use diagnostics::{Diagnostic, Loaded};
pub use env::{EnvSource, ProcessEnv, env_var_name};
pub use file::ConfigSearch;
pub use loader::{load, load_with};
pub use resolved::{ResolvedEntry, Settings};
pub use store::TieredStore;
pub use summary::print_summary;
pub use tier::SourceTier;
pub use value::ConfigValue;
