mod config;
mod contact_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use contact_config::ContactConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "PF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pf";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://iaw3hfgw1g.execute-api.ap-northeast-1.amazonaws.com/prod/contact";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
