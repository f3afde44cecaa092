// File: crates/chart-core/src/record.rs
// Summary: Lenient parser for `year,month,day,hour,elapsedMillis` records.
// Notes:
// - Malformed numbers become zero instead of errors; a bad line never aborts ingestion.
// - Calendar fields are normalized (month 0 is December of the previous year, day 0 is
//   the last day of the previous month, hour 24 is midnight of the next day).

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::types::Sample;

/// Field delimiter of the measurement log.
pub const DELIMITER: char = ',';

/// The five fields of one log line, after lenient numeric parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawRecord {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub elapsed_millis: f64,
}

impl RawRecord {
    /// Build a record from positional fields; missing trailing fields read as zero.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut it = fields.into_iter();
        let mut next = || it.next().unwrap_or("");
        let year = parse_int(next());
        let month = parse_int(next());
        let day = parse_int(next());
        let hour = parse_int(next());
        let elapsed_millis = parse_float(next());
        Self { year, month, day, hour, elapsed_millis }
    }

    /// Timestamp at (year, month, day, hour):00:00 UTC.
    pub fn timestamp(&self) -> DateTime<Utc> {
        normalized_timestamp(self.year, self.month, self.day, self.hour)
            .unwrap_or_default()
    }

    pub fn to_sample(&self) -> Sample {
        Sample::new(self.timestamp(), self.elapsed_millis)
    }
}

/// Split one delimited line into its raw fields.
pub fn parse_record(line: &str) -> RawRecord {
    RawRecord::from_fields(line.split(DELIMITER))
}

/// Parse one delimited line straight into a [`Sample`].
pub fn parse_sample(line: &str) -> Sample {
    parse_record(line).to_sample()
}

/// Integer field; anything unparsable is zero.
pub fn parse_int(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

/// Float field; anything unparsable is zero.
pub fn parse_float(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

fn normalized_timestamp(year: i32, month: i32, day: i32, hour: i32) -> Option<DateTime<Utc>> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let y = i32::try_from(months.div_euclid(12)).ok()?;
    let m = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(y, m, 1)?.and_hms_opt(0, 0, 0)?;
    let dt = first
        .checked_add_signed(Duration::days(i64::from(day) - 1))?
        .checked_add_signed(Duration::hours(i64::from(hour)))?;
    Some(Utc.from_utc_datetime(&dt))
}
