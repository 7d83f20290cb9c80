//! Line-buffered writer used to forward formatted events to a sink.
//!
//! `tracing-subscriber` writes one event per writer instance; the buffered
//! text is handed to the sink when the writer is flushed or dropped.

use std::io;

/// Buffers formatted output and hands complete lines to a sink.
pub struct LineWriter<F: Fn(&str)> {
    sink: F,
    buffer: Vec<u8>,
}

impl<F: Fn(&str)> LineWriter<F> {
    /// Create a writer that forwards to `sink`.
    pub const fn new(sink: F) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            (self.sink)(line);
        }
    }
}

impl<F: Fn(&str)> io::Write for LineWriter<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl<F: Fn(&str)> Drop for LineWriter<F> {
    fn drop(&mut self) {
        self.emit();
    }
}

/// `MakeWriter` that prints each event to the browser console.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

#[cfg(target_arch = "wasm32")]
fn console_sink(line: &str) {
    gloo::console::log!(line.to_string());
}

#[cfg(target_arch = "wasm32")]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter<fn(&str)>;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(console_sink as fn(&str))
    }
}
