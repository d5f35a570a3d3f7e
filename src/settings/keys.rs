//! Configuration keys understood by Cyrus and their built-in defaults.
//!
//! Keys are dot-delimited and never contain `_`, which is reserved for the
//! environment variable mapping.

use super::value::ConfigValue;

pub const CONFIG_FILE_NAME: &str = "ConfigFileName";
pub const MODULES: &str = "Modules";
pub const LOG_LEVEL: &str = "LogLevel";
pub const LOG_FILE: &str = "LogFile";
pub const LOG_STDOUT: &str = "LogStdout";
pub const DEBUG: &str = "Debug";
pub const DEMO: &str = "Demo";
pub const DATA_DIR: &str = "DataDir";
pub const RESOURCE_DIR: &str = "ResourceDir";
pub const DB_DRIVER: &str = "DB.Driver";
pub const DB_HOST: &str = "DB.Host";
pub const DB_PORT: &str = "DB.Port";
pub const DB_USER: &str = "DB.User";
pub const DB_PASSWORD: &str = "DB.Password";
pub const DB_NAME: &str = "DB.Name";
pub const DB_SSL_MODE: &str = "DB.SSLMode";
pub const DB_SSL_CERT: &str = "DB.SSLCert";
pub const DB_SSL_KEY: &str = "DB.SSLKey";
pub const DB_SSL_CA: &str = "DB.SSLCA";

/// Prefix of every environment variable bound to a key.
pub const ENV_PREFIX: &str = "cyrus";
/// Base name of the configuration file, without extension.
pub const CONFIG_BASE_NAME: &str = "cyrus";
/// Name of the per-user data directory created under the home directory.
pub const HOME_DATA_DIR_NAME: &str = ".cyrus";

pub const DEFAULT_MODULE: &str = "github.com/vitesales/cyrus-web";

/// Every key bound to a command-line flag, in flag declaration order.
pub const ALL: [&str; 19] = [
	CONFIG_FILE_NAME,
	MODULES,
	LOG_LEVEL,
	LOG_FILE,
	LOG_STDOUT,
	DEBUG,
	DEMO,
	DATA_DIR,
	RESOURCE_DIR,
	DB_DRIVER,
	DB_HOST,
	DB_PORT,
	DB_USER,
	DB_PASSWORD,
	DB_NAME,
	DB_SSL_MODE,
	DB_SSL_CERT,
	DB_SSL_KEY,
	DB_SSL_CA,
];

/// Built-in default of each flag, registered at the default tier.
pub fn defaults() -> Vec<(&'static str, ConfigValue)> {
	vec![
		(CONFIG_FILE_NAME, "".into()),
		(MODULES, ConfigValue::List(vec![DEFAULT_MODULE.to_string()])),
		(LOG_LEVEL, "info".into()),
		(LOG_FILE, "".into()),
		(LOG_STDOUT, false.into()),
		(DEBUG, false.into()),
		(DEMO, false.into()),
		(DATA_DIR, "".into()),
		(RESOURCE_DIR, "./res".into()),
		(DB_DRIVER, "postgres".into()),
		(DB_HOST, "/var/run/postgresql".into()),
		(DB_PORT, "5432".into()),
		(DB_USER, "".into()),
		(DB_PASSWORD, "".into()),
		(DB_NAME, "hexya".into()),
		(DB_SSL_MODE, "disable".into()),
		(DB_SSL_CERT, "".into()),
		(DB_SSL_KEY, "".into()),
		(DB_SSL_CA, "".into()),
	]
}
