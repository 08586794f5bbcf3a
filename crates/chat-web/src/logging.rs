//! Browser Logging
//!
//! Routes `tracing` events to the developer console.

use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&line.trim_end().into());
    }
}

/// Filter from `directives`, falling back to `info` when absent or invalid
fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the console subscriber. The filter comes from `CHAT_LOG` at build time.
pub fn init() {
    // No wall clock in wasm32-unknown-unknown
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(option_env!("CHAT_LOG")))
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .try_init();
}
