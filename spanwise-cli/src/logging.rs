//! Logging initialisation for the spanwise CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr and bridges the
//! `log` facade, so report rows on stdout stay machine-readable.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "SPANWISE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output encoding for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text lines for terminals.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `SPANWISE_LOG_FORMAT` held bytes that are not valid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `SPANWISE_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs global structured logging once per process.
///
/// `SPANWISE_LOG_FORMAT` selects `human` (default) or `json` output and
/// `RUST_LOG` sets the filter, defaulting to `info`. A subscriber installed
/// by someone else is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when `SPANWISE_LOG_FORMAT` is not valid Unicode
/// or names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = log_format_from_env()?;
    match install_subscriber(format) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn log_format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best effort: another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
