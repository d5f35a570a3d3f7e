use clap::builder::BoolishValueParser;
use clap::{ColorChoice, Parser};

use super::options::{Command, OutputFormat};
use super::styles::{cli_styles, long_version};
use crate::settings::{ConfigValue, keys};

/// Command-line arguments accepted by the `cyrus` binary.
///
/// Configuration flags are `Option`s: `None` means the user did not pass the
/// flag, so the value is left to lower-precedence sources.
#[derive(Parser, Debug)]
#[command(
    name = "cyrus",
    version,
    long_version = long_version(),
    about = "Cyrus is an open source modular ERP",
    long_about = "Cyrus is an open source modular ERP.\nIt is designed for high demand business data processing while being easily customizable.",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub struct CliArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Alternate configuration file to read (default: search ./, ~/.cyrus/)"
    )]
    pub config: Option<String>,
    #[arg(
        short = 'm',
        long = "modules",
        value_delimiter = ',',
        value_name = "MODULE",
        global = true,
        help = "List of module paths to load (default: github.com/vitesales/cyrus-web)"
    )]
    pub modules: Option<Vec<String>>,
    #[arg(
        short = 'L',
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        help = "Log level, one of 'debug', 'info', 'warn', 'error' or 'panic' (default: info)"
    )]
    pub log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        global = true,
        help = "File to which the log will be written (default: none)"
    )]
    pub log_file: Option<String>,
    #[arg(
        short = 'o',
        long = "log-stdout",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        global = true,
        help = "Enable stdout logging, for development or debugging (default: disabled)"
    )]
    pub log_stdout: Option<bool>,
    #[arg(
        long = "debug",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        global = true,
        help = "Enable server debug mode for development (default: disabled)"
    )]
    pub debug: Option<bool>,
    #[arg(
        long = "demo",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        global = true,
        help = "Load demo data for evaluating or tests (default: disabled)"
    )]
    pub demo: Option<bool>,
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        global = true,
        help = "Directory where Cyrus stores its data (default: ~/.cyrus)"
    )]
    pub data_dir: Option<String>,
    #[arg(
        long = "resource-dir",
        value_name = "PATH",
        global = true,
        help = "Directory where Cyrus reads its resources (default: ./res)"
    )]
    pub resource_dir: Option<String>,
    #[arg(
        long = "db-driver",
        value_name = "DRIVER",
        global = true,
        help = "Database driver to use (default: postgres)"
    )]
    pub db_driver: Option<String>,
    #[arg(
        long = "db-host",
        value_name = "HOST",
        global = true,
        help = "Database host; values starting with / are unix socket directories (default: /var/run/postgresql)"
    )]
    pub db_host: Option<String>,
    #[arg(
        long = "db-port",
        value_name = "PORT",
        global = true,
        help = "Database port, ignored when db-host is not set (default: 5432)"
    )]
    pub db_port: Option<String>,
    #[arg(
        long = "db-user",
        value_name = "USER",
        global = true,
        help = "Database user (default: current user)"
    )]
    pub db_user: Option<String>,
    #[arg(
        long = "db-password",
        value_name = "PASSWORD",
        global = true,
        help = "Database password, leave empty when connecting through a socket (default: empty)"
    )]
    pub db_password: Option<String>,
    #[arg(
        long = "db-name",
        value_name = "NAME",
        global = true,
        help = "Database name (default: hexya)"
    )]
    pub db_name: Option<String>,
    #[arg(
        long = "db-ssl-mode",
        value_name = "MODE",
        global = true,
        help = "SSL mode, one of 'disable', 'require', 'verify-ca' or 'verify-full' (default: disable)"
    )]
    pub db_ssl_mode: Option<String>,
    #[arg(
        long = "db-ssl-cert",
        value_name = "FILE",
        global = true,
        help = "Path to client certificate file (default: none)"
    )]
    pub db_ssl_cert: Option<String>,
    #[arg(
        long = "db-ssl-key",
        value_name = "FILE",
        global = true,
        help = "Path to client private key file (default: none)"
    )]
    pub db_ssl_key: Option<String>,
    #[arg(
        long = "db-ssl-ca",
        value_name = "FILE",
        global = true,
        help = "Path to certificate authority certificate(s) file (default: none)"
    )]
    pub db_ssl_ca: Option<String>,
    #[arg(
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        global = true,
        help = "Choose how to print results"
    )]
    pub output: OutputFormat,
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl CliArgs {
    /// Configuration values for every flag the user passed, keyed by setting.
    pub fn command_line_values(&self) -> Vec<(&'static str, ConfigValue)> {
        let strings = [
            (keys::CONFIG_FILE_NAME, &self.config),
            (keys::LOG_LEVEL, &self.log_level),
            (keys::LOG_FILE, &self.log_file),
            (keys::DATA_DIR, &self.data_dir),
            (keys::RESOURCE_DIR, &self.resource_dir),
            (keys::DB_DRIVER, &self.db_driver),
            (keys::DB_HOST, &self.db_host),
            (keys::DB_PORT, &self.db_port),
            (keys::DB_USER, &self.db_user),
            (keys::DB_PASSWORD, &self.db_password),
            (keys::DB_NAME, &self.db_name),
            (keys::DB_SSL_MODE, &self.db_ssl_mode),
            (keys::DB_SSL_CERT, &self.db_ssl_cert),
            (keys::DB_SSL_KEY, &self.db_ssl_key),
            (keys::DB_SSL_CA, &self.db_ssl_ca),
        ];
        let bools = [
            (keys::LOG_STDOUT, self.log_stdout),
            (keys::DEBUG, self.debug),
            (keys::DEMO, self.demo),
        ];

        let mut values = Vec::new();
        if let Some(modules) = &self.modules {
            values.push((keys::MODULES, ConfigValue::List(modules.clone())));
        }
        values.extend(
            strings
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|value| (key, ConfigValue::String(value)))),
        );
        values.extend(
            bools
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, ConfigValue::Bool(value)))),
        );
        values
    }
}
