use crate::model::error::system::SystemError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub struct Logging;

impl Logging {
    /// Installs the global subscriber: compact stdout plus a daily rolling file.
    ///
    /// `RUST_LOG` overrides `level`. The returned guard flushes the file writer
    /// on drop, so it must live until the program exits.
    pub fn initialize(level: &str, directory: &Path) -> Result<WorkerGuard, SystemError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|err| SystemError::LoggingSetupFailed {
                reason: err.to_string(),
            })?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("folder-comparator")
            .filename_suffix("log")
            .max_log_files(7)
            .build(directory)
            .map_err(|err| SystemError::LoggingSetupFailed {
                reason: err.to_string(),
            })?;
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            )
            .with(fmt::layer().with_writer(file_writer).with_ansi(false))
            .try_init()
            .map_err(|err| SystemError::LoggingSetupFailed {
                reason: err.to_string(),
            })?;

        log_panics::init();

        Ok(guard)
    }
}
