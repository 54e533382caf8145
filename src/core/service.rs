use crate::core::buffer::DisplayBuffer;
use crate::domain::model::{CopyReport, Invocation};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::Write;

pub struct NativeService<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> NativeService<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Dispatches one invocation, writing its single output line to `out`.
    pub fn run<W: Write>(
        &self,
        invocation: &Invocation,
        out: &mut W,
    ) -> Result<Option<CopyReport>> {
        match invocation {
            Invocation::Idle => {
                tracing::debug!("No input supplied, announcing idle state");
                self.announce_idle(out)?;
                Ok(None)
            }
            Invocation::Process(input) => {
                tracing::debug!(input_len = input.len(), "Processing first argument");
                self.process_input(input, out).map(Some)
            }
        }
    }

    pub fn announce_idle<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.config.idle_message())?;
        Ok(())
    }

    /// Copies `input` through a bounded buffer and writes the labelled result.
    ///
    /// `input` is only borrowed; nothing past the buffer capacity is ever copied.
    pub fn process_input<W: Write>(&self, input: &[u8], out: &mut W) -> Result<CopyReport> {
        let mut buffer = DisplayBuffer::with_capacity(self.config.buffer_capacity())?;
        let report = buffer.copy_from(input);

        if report.is_truncated() {
            tracing::debug!(
                input_len = report.input_len,
                copied = report.copied,
                capacity = buffer.capacity(),
                "Input truncated to buffer capacity"
            );
        }

        out.write_all(self.config.label().as_bytes())?;
        out.write_all(buffer.as_bytes())?;
        out.write_all(b"\n")?;

        Ok(report)
    }
}
