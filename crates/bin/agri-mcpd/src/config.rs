use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_ENV_FILE: &str = ".env.local";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_GATEWAY_ADDR: &str = "127.0.0.1:4031";
const DEFAULT_GATEWAY_MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "agri-mcpd", version, about = "AgriLink advisory tool daemon.")]
#[allow(clippy::struct_excessive_bools)]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "AGRI_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "AGRI_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "AGRI_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "AGRI_MCP_STATELESS",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_stateless: bool,

    #[arg(
        long,
        env = "AGRI_GATEWAY_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    gateway_serve: bool,

    #[arg(long, env = "AGRI_GATEWAY_ADDR", default_value = DEFAULT_GATEWAY_ADDR)]
    gateway_addr: SocketAddr,

    #[arg(
        long,
        env = "AGRI_GATEWAY_MAX_BODY_BYTES",
        default_value_t = DEFAULT_GATEWAY_MAX_BODY_BYTES
    )]
    gateway_max_body_bytes: usize,

    /// Pins the farming calendar to a month (1-12) instead of the wall clock.
    #[arg(long, env = "AGRI_FIXED_MONTH")]
    fixed_month: Option<u32>,

    #[arg(long = "log", env = "AGRI_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AgriConfig {
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub mcp_stateless: bool,
    pub gateway_serve: bool,
    pub gateway_addr: SocketAddr,
    pub gateway_max_body_bytes: usize,
    pub fixed_month: Option<u32>,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
    EnvFile { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
            Self::EnvFile { path, message } => {
                write!(f, "failed to load env file {}: {message}", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

impl AgriConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

/// Loads `AGRI_ENV_FILE` (default `.env.local`) into the process environment.
///
/// Variables already set take precedence. Returns the path when a file was
/// loaded; a missing file is not an error, a malformed one is.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    let path = std::env::var("AGRI_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    load_env_from(Path::new(&path))
}

fn load_env_from(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::from_filename(path) {
        Ok(loaded) => Ok(Some(loaded)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
    }
}

impl TryFrom<CliArgs> for AgriConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !(args.enable_stdio || args.mcp_serve || args.gateway_serve) {
            return Err(ConfigError::MissingSetting(
                "AGRI_ENABLE_STDIO, AGRI_MCP_SERVE or AGRI_GATEWAY_SERVE",
            ));
        }

        if let Some(month) = args.fixed_month.filter(|month| !(1..=12).contains(month)) {
            return Err(ConfigError::InvalidSetting {
                name: "AGRI_FIXED_MONTH",
                value: month.to_string(),
            });
        }

        if args.gateway_max_body_bytes == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "AGRI_GATEWAY_MAX_BODY_BYTES",
                value: args.gateway_max_body_bytes.to_string(),
            });
        }

        let log_filter = args.log_filter.trim().to_string();
        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "AGRI_LOG",
                value: args.log_filter,
            });
        }

        Ok(Self {
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            mcp_stateless: args.mcp_stateless,
            gateway_serve: args.gateway_serve,
            gateway_addr: args.gateway_addr,
            gateway_max_body_bytes: args.gateway_max_body_bytes,
            fixed_month: args.fixed_month,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: false,
            mcp_serve: true,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            mcp_stateless: false,
            gateway_serve: true,
            gateway_addr: DEFAULT_GATEWAY_ADDR.parse().expect("valid gateway addr"),
            gateway_max_body_bytes: DEFAULT_GATEWAY_MAX_BODY_BYTES,
            fixed_month: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn defaults_parse() {
        let config = AgriConfig::try_from(base_args()).expect("config should parse");

        assert!(config.mcp_serve);
        assert!(config.gateway_serve);
        assert!(!config.enable_stdio);
        assert_eq!(config.fixed_month, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn cli_flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "agri-mcpd",
            "--stdio",
            "--fixed-month",
            "7",
            "--gateway-addr",
            "0.0.0.0:9000",
        ])
        .expect("arguments should parse");
        let config = AgriConfig::try_from(args).expect("config should parse");

        assert!(config.enable_stdio);
        assert_eq!(config.fixed_month, Some(7));
        assert_eq!(config.gateway_addr.port(), 9000);
    }

    #[test]
    fn rejects_out_of_range_month() {
        for month in [0, 13] {
            let mut args = base_args();
            args.fixed_month = Some(month);

            let err = AgriConfig::try_from(args).expect_err("month should be rejected");
            assert!(matches!(
                err,
                ConfigError::InvalidSetting { name: "AGRI_FIXED_MONTH", .. }
            ));
        }
    }

    #[test]
    fn requires_a_transport() {
        let mut args = base_args();
        args.mcp_serve = false;
        args.gateway_serve = false;

        let err = AgriConfig::try_from(args).expect_err("no transport should be rejected");
        assert!(matches!(err, ConfigError::MissingSetting(_)));
    }

    #[test]
    fn missing_env_file_is_skipped() {
        let path = std::env::temp_dir().join("agri-mcpd-no-such-env-file");
        let loaded = load_env_from(&path).expect("missing file should be ignored");
        assert_eq!(loaded, None);
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let path = std::env::temp_dir().join(format!("agri-mcpd-bad-{}.env", std::process::id()));
        std::fs::write(&path, "this line is not an assignment\n").expect("env file should be written");

        let err = load_env_from(&path).expect_err("malformed file should fail");
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }

    #[test]
    fn rejects_malformed_log_filter() {
        let mut args = base_args();
        args.log_filter = "agri_core=loud".to_string();

        assert!(AgriConfig::try_from(args).is_err());
    }
}
