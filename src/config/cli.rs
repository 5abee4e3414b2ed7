use crate::config::OutputFormat;
use crate::core::{DimensionSource, ResultSink, SurfaceArea};
use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Line-oriented input over any buffered reader (stdin, a file, a cursor).
#[derive(Debug)]
pub struct LineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl LineSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> DimensionSource for LineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Writes one line per result in the configured format.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn write_result(&mut self, result: &SurfaceArea) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", result.area)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, result)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
