use crate::domain::response::ApiResponse;
use crate::error::{AnvilError, Result};
use std::io::Write;

/// Writes decoded responses as indented JSON.
///
/// Output uses two-space indentation and ends with a newline.
pub struct ResponseWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a new `ResponseWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_response(&mut self, response: &ApiResponse) -> Result<()> {
        let pretty = serde_json::to_string_pretty(response).map_err(AnvilError::EncodeError)?;
        writeln!(self.writer, "{pretty}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}
