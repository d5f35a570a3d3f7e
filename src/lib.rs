//! Bootstrap core of the Cyrus modular ERP.
//!
//! [`settings`] merges defaults, the `cyrus.toml` file, `CYRUS_*` environment
//! variables and command-line flags into an immutable [`Settings`] snapshot.
//! [`resources`] uses the resolved module list to discover the static files
//! each module ships.

pub mod app_dirs;
pub mod cli;
pub mod error;
pub mod logging;
pub mod resources;
pub mod settings;

pub use error::UserError;
pub use resources::{ModuleResourceIndex, ResourceEntry, list_static_files};
pub use settings::{ConfigValue, Diagnostic, Loaded, Settings, SettingsBuilder, SourceTier};
