use crate::BenchmarkRecord;
use anyhow::{anyhow, Result};
use knap_utils::jsonify;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Receives one record per executed solver invocation.
pub trait ResultSink {
    fn record(&mut self, record: &BenchmarkRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes each record as a single JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| anyhow!("Failed to create output file {}: {}", path.display(), e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn record(&mut self, record: &BenchmarkRecord) -> Result<()> {
        writeln!(self.writer, "{}", jsonify(record)?)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub records: Vec<BenchmarkRecord>,
}

impl ResultSink for MemorySink {
    fn record(&mut self, record: &BenchmarkRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
