//! Logging: `log` facade dengan backend `env_logger`

mod init;

pub use init::{init_logging, LoggingConfig};
