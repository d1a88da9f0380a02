//! `tracing` subscriber setup.
//!
//! The CLI logs to stderr. In the page, log lines go to the browser console
//! through [`ConsoleMakeWriter`]: warnings to `console.warn`, errors to
//! `console.error`, everything else to `console.log`. Timestamps are off in
//! both cases (the console stamps its own, and `wasm32-unknown-unknown` has
//! no system clock).

use tracing::level_filters::LevelFilter;

/// Parse a level name as accepted by `--log-level`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Install the global subscriber. Returns `false` if one was already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install the global subscriber. Returns `false` if one was already set.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(console::ConsoleMakeWriter)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
pub use console::ConsoleMakeWriter;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    #[derive(Debug, Clone, Copy)]
    enum Channel {
        Log,
        Warn,
        Error,
    }

    /// Buffers one formatted event and hands it to the console on drop.
    pub struct ConsoleWriter {
        channel: Channel,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buf.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buf);
            let value = JsValue::from_str(line.trim_end());
            match self.channel {
                Channel::Log => web_sys::console::log_1(&value),
                Channel::Warn => web_sys::console::warn_1(&value),
                Channel::Error => web_sys::console::error_1(&value),
            }
            self.buf.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                channel: Channel::Log,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            let channel = match *meta.level() {
                Level::ERROR => Channel::Error,
                Level::WARN => Channel::Warn,
                _ => Channel::Log,
            };
            ConsoleWriter {
                channel,
                buf: Vec::new(),
            }
        }
    }
}
