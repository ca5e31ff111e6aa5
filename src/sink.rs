use std::io::{self, Write};

/// Receives everything a program prints.
pub trait Sink {
    fn emit(&mut self, text: &str) -> io::Result<()>;
}

/// Capture output in memory.
impl Sink for String {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Forward output to any writer, flushing after each emit so interleaved
/// diagnostics stay in order.
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.inner.flush()
    }
}

/// Drop everything. Useful when only the final state matters.
pub struct Discard;

impl Sink for Discard {
    fn emit(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
