use once_cell::sync::Lazy;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

type LogSink = Box<dyn Write + Send>;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<LogSink>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger.
/// With a path, the file is created (or truncated) and buffered; without one,
/// messages go to stderr.
pub fn init_global_logger(log_file_path: Option<&Path>) -> Result<(), IoError> {
    let sink: LogSink = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stderr()),
    };
    install(sink);
    Ok(())
}

fn install(sink: LogSink) {
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(sink),
        Err(poisoned) => *poisoned.into_inner() = Some(sink),
    }
}

fn write_line(prefix: &str, args: fmt::Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}{}", prefix, args);
            }
        }
        // If logger is None (not initialized), verbose messages are suppressed.
    } else {
        eprintln!("Fallback (logger mutex error): {}{}", prefix, args);
    }
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: fmt::Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: fmt::Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Flushes buffered log output. A no-op when the logger was never initialized.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::new(io::ErrorKind::Other, "logger mutex poisoned")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<StdMutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // Only test in this binary that installs a sink, so the global is not raced.
    #[test]
    fn messages_reach_installed_sink() {
        let buffer = SharedBuffer::default();
        install(Box::new(buffer.clone()));

        log_verbose_message_args(format_args!("found {} paths", 3));
        log_verbose_error_args(format_args!("bad line {}", 2));
        flush_global_logger().unwrap();

        let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "found 3 paths\nERROR: bad line 2\n");
    }
}
