use std::io::Write;

use crate::errors::Result;
use crate::template::SpecializationTemplate;

/// Destination for rendered specialization blocks.
pub trait SpecializationEmitter {
    /// Render the template for `qualifiers` and emit it.
    fn emit(&mut self, qualifiers: &str) -> Result<()>;
}

/// Writes each rendered block followed by a blank-line separator.
///
/// Blocks are flushed one at a time; nothing is collected between calls.
pub struct SpecializationWriter<W: Write> {
    writer: W,
    template: SpecializationTemplate,
    emitted: usize,
}

impl<W: Write> SpecializationWriter<W> {
    pub fn new(writer: W, template: SpecializationTemplate) -> Self {
        Self {
            writer,
            template,
            emitted: 0,
        }
    }

    /// Number of blocks written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SpecializationEmitter for SpecializationWriter<W> {
    fn emit(&mut self, qualifiers: &str) -> Result<()> {
        let block = self.template.render(qualifiers);
        self.writer.write_all(block.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.emitted += 1;
        Ok(())
    }
}
