use chrono::Timelike;
use itertools::Itertools;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    series::Point,
    tariff::{RateTable, Schedule},
};

/// Price a consumption series against a rate table.
///
/// The output is aligned 1:1 with the input; each record is priced
/// independently, so permuting the input permutes the costs identically.
/// The whole batch aborts on the first record whose hour falls outside the
/// tariff day, with the record index and timestamp in the error context —
/// partial results are never returned.
pub fn price_series(
    table: &RateTable,
    records: &[Point<KilowattHours>],
) -> Result<Vec<Point<Cost>>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let rate = table
                .rate_for_hour(i64::from(record.time.hour()))
                .with_context(|| format!("record #{index} at {}", record.time))?;
            Ok(record.map(|consumption| consumption * rate))
        })
        .collect()
}

/// Per-band slice of a priced series.
#[derive(Clone, Debug)]
pub struct BandBreakdown {
    pub name: String,
    pub rate: KilowattHourRate,
    pub hour_span: u8,
    pub record_count: usize,
    pub consumption: KilowattHours,
    pub cost: Cost,
}

/// Aggregate a priced series into one row per schedule band.
pub fn summarize(
    schedule: &Schedule,
    records: &[Point<KilowattHours>],
    costs: &[Point<Cost>],
) -> Result<Vec<BandBreakdown>> {
    let table = schedule.rate_table();
    let mut breakdowns = schedule
        .bands()
        .iter()
        .map(|band| BandBreakdown {
            name: band.name.clone(),
            rate: band.rate,
            hour_span: band.hour_span(),
            record_count: 0,
            consumption: KilowattHours::ZERO,
            cost: Cost::ZERO,
        })
        .collect_vec();
    for (index, (record, cost)) in records.iter().zip_eq(costs).enumerate() {
        let band_index = table
            .band_index_for_hour(i64::from(record.time.hour()))
            .with_context(|| format!("record #{index} at {}", record.time))?;
        let breakdown = &mut breakdowns[band_index];
        breakdown.record_count += 1;
        breakdown.consumption += record.value;
        breakdown.cost += cost.value;
    }
    Ok(breakdowns)
}
