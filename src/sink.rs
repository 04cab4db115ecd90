use std::fs;
use std::io;
use std::io::prelude::*;

/// Where output lines go. Every line is echoed to the console writer as soon
/// as it's produced and kept, so the whole run can be written to a file at
/// the end.
pub struct OutputSink<T: io::Write> {
    console: T,
    lines: Vec<String>,
}

impl<T: io::Write> OutputSink<T> {
    pub fn new(console: T) -> Self {
        OutputSink {
            console,
            lines: Vec::new(),
        }
    }

    pub fn write_line(&mut self, line: String) -> io::Result<()> {
        writeln!(self.console, "{}", line)?;
        self.lines.push(line);
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn console(&mut self) -> &mut T {
        &mut self.console
    }

    /// Writes every line produced so far to `output`, one per line.
    pub fn write_lines_to<W: io::Write>(&self, mut output: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(output, "{}", line)?;
        }
        output.flush()
    }

    /// Replaces the file at `path` with every line produced so far.
    pub fn write_to_file(&self, path: &str) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_lines_to(io::BufWriter::new(file))
    }
}
