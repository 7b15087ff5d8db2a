//! Tracing subscriber that writes formatted lines to the browser console.
//!
//! # Design
//! - One global fmt subscriber, installed once from `run_app`.
//! - No timestamps (wasm has no system clock) and no ANSI colours.

use std::io::{self, Write};

use gloo::console;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the console subscriber. A second call is a no-op.
pub(crate) fn init_logging() {
    let max_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let installed = tracing_subscriber::registry()
        .with(max_level)
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .with_writer(ConsoleMakeWriter),
        )
        .try_init();
    if let Err(err) = installed {
        console::warn!(format!("tracing subscriber not installed: {err}"));
    }
}

#[derive(Clone, Copy, Debug)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        for line in text.lines().filter(|line| !line.is_empty()) {
            console::log!(line.to_string());
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}
