// File: crates/chart-core/src/source.rs
// Summary: Series builder reading the comma-delimited measurement log into a time series.
// Notes:
// - No header row and no quoting; records may be short or long (the lenient parser zero-fills).
// - Fields are decoded lossily, so invalid UTF-8 in a field parses as zero like any bad number.
// - An unreadable source (open failure or a read error mid-stream) yields an empty
//   series after a warning. Partially read data is discarded.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ChartError;
use crate::record::{RawRecord, DELIMITER};
use crate::series::TimeSeries;
use crate::style::Style;
use crate::types::Sample;

/// Reads samples from a delimited text source, one record per line.
pub struct SeriesBuilder<R: Read> {
    reader: csv::Reader<R>,
}

impl SeriesBuilder<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ChartError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> SeriesBuilder<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .quoting(false)
            .delimiter(DELIMITER as u8)
            .from_reader(reader);
        Self { reader }
    }

    /// Consume the source, parsing every record in input order.
    pub fn samples(mut self) -> Result<Vec<Sample>, ChartError> {
        let mut out = Vec::new();
        let mut record = csv::ByteRecord::new();
        loop {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    let fields: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
                    out.push(RawRecord::from_fields(fields.iter().map(|f| f.as_ref())).to_sample());
                }
                Ok(false) => break,
                Err(source) => {
                    return Err(ChartError::Read { record: out.len() as u64, source });
                }
            }
        }
        Ok(out)
    }

    /// Consume the source into a named series.
    pub fn build(self, name: impl Into<String>, style: Style) -> Result<TimeSeries, ChartError> {
        Ok(TimeSeries::new(name, style).with_samples(self.samples()?))
    }
}

/// Read every sample from the file at `path`.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>, ChartError> {
    SeriesBuilder::from_path(path)?.samples()
}

/// Load the measurement log at `path`; an unreadable source gives an empty series.
pub fn load_time_series(path: impl AsRef<Path>, name: impl Into<String>, style: Style) -> TimeSeries {
    let path = path.as_ref();
    let name = name.into();
    match read_samples(path) {
        Ok(samples) => {
            debug!(path = %path.display(), samples = samples.len(), "loaded measurement log");
            TimeSeries::new(name, style).with_samples(samples)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, cause = ?std::error::Error::source(&err), "data source unreadable; using empty series");
            TimeSeries::new(name, style)
        }
    }
}
