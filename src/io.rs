use std::io::{Read, Write};

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    series::Point,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const TIMESTAMP_FORMAT_WITH_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
struct RawRecord {
    timestamp: String,
    kwh: f64,
}

#[derive(Serialize)]
struct CostedRecord {
    timestamp: String,
    kwh: f64,
    cost: f64,
}

/// Read a consumption series from CSV with a `timestamp,kwh` header.
pub fn read_consumption(reader: impl Read) -> Result<Vec<Point<KilowattHours>>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row = row.with_context(|| format!("failed to read record #{index}"))?;
        let time = parse_timestamp(&row.timestamp)
            .with_context(|| format!("record #{index}: bad timestamp `{}`", row.timestamp))?;
        ensure!(
            row.kwh >= 0.0,
            "record #{index} at {time}: negative consumption ({} kWh)",
            row.kwh,
        );
        records.push(Point::new(time, KilowattHours::from(row.kwh)));
    }
    Ok(records)
}

/// Write the costed series back out as `timestamp,kwh,cost`.
pub fn write_costed(
    writer: impl Write,
    records: &[Point<KilowattHours>],
    costs: &[Point<Cost>],
) -> Result {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    for (record, cost) in records.iter().zip_eq(costs) {
        csv_writer.serialize(CostedRecord {
            timestamp: record.time.format(TIMESTAMP_FORMAT).to_string(),
            kwh: record.value.into_inner(),
            cost: cost.value.into_inner(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT_WITH_SECONDS))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_read_consumption() {
        let csv = "timestamp,kwh\n2013-01-01 00:00,0.586\n2013-01-01 01:00, 0.451\n";
        let records = read_consumption(Cursor::new(csv)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].time,
            NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(records[1].value, KilowattHours::from(0.451));
    }

    #[test]
    fn test_read_consumption_with_seconds() {
        let csv = "timestamp,kwh\n2013-06-15 13:00:00,1.25\n";
        let records = read_consumption(Cursor::new(csv)).unwrap();
        assert_eq!(records[0].time.format("%H").to_string(), "13");
    }

    #[test]
    fn test_rejects_negative_consumption() {
        let csv = "timestamp,kwh\n2013-01-01 00:00,-0.5\n";
        assert!(read_consumption(Cursor::new(csv)).is_err());
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        let csv = "timestamp,kwh\n01/01/2013 00:00,0.5\n";
        assert!(read_consumption(Cursor::new(csv)).is_err());
    }

    #[test]
    fn test_write_costed() {
        let time = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(17, 0, 0).unwrap();
        let records = [Point::new(time, KilowattHours::from(2.0))];
        let costs = [Point::new(time, Cost::from(56.0))];
        let mut buffer = Vec::new();
        write_costed(&mut buffer, &records, &costs).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "timestamp,kwh,cost\n2013-01-01 17:00,2.0,56.0\n",
        );
    }
}
