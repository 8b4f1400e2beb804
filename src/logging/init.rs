//! Inisialisasi global logger
//!
//! Urutan prioritas filter:
//! 1. `LoggingConfig::filter` (syntax `env_logger`, mis. "coordwire=debug")
//! 2. Environment variable `RUST_LOG`
//! 3. `LoggingConfig::level`

use std::sync::Once;

use log::LevelFilter;

/// Konfigurasi logger
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter eksplisit, mengalahkan `RUST_LOG`
    pub filter: Option<String>,
    /// Level fallback jika tidak ada filter sama sekali
    pub level: LevelFilter,
    /// Tampilkan timestamp di setiap baris
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// Config untuk flag `--verbose` di CLI
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self {
                filter: Some(format!("{}=debug", env!("CARGO_CRATE_NAME"))),
                timestamps: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match (&self.filter, std::env::var("RUST_LOG")) {
            (Some(filter), _) => builder.parse_filters(filter),
            (None, Ok(filter)) => builder.parse_filters(&filter),
            (None, Err(_)) => builder.filter_level(self.level),
        };

        if !self.timestamps {
            builder.format_timestamp(None);
        }
        builder
    }
}

static INIT: Once = Once::new();

/// Pasang global logger, hanya sekali per proses.
///
/// Panggilan berikutnya diabaikan. Jika logger lain sudah terpasang
/// (mis. oleh host atau test harness), logger tersebut dipertahankan.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if config.builder().try_init().is_ok() {
            log::debug!("logging aktif: {:?}", config);
        }
    });
}
