use log::SetLoggerError;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Log to stderr (debug with `verbose`, info otherwise) and, at debug
/// level, to `log_file`.
///
/// Fails if a logger is already installed. A log file that cannot be
/// created only costs the file output, and is reported on stderr.
pub fn init(log_file: &Path, verbose: bool) -> Result<(), SetLoggerError> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let file_error = match File::create(log_file) {
        Ok(file) => {
            loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, file));
            None
        }
        Err(err) => Some(err),
    };

    CombinedLogger::init(loggers)?;

    if let Some(err) = file_error {
        log::warn!("Not logging to {}: {}", log_file.display(), err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The logger is process-wide, so both cases share one test.
    #[test]
    fn test_init_once() {
        let dir = tempfile::tempdir().unwrap();
        let unwritable = dir.path().join("missing").join("aockit.log");

        assert!(init(&unwritable, false).is_ok());
        assert!(!unwritable.exists());
        assert!(init(&dir.path().join("aockit.log"), true).is_err());
    }
}
