use crate::{
    quantity::rate::KilowattHourRate,
    tariff::{InvalidHour, Schedule},
};

/// Hour-indexed lookup precomputed from a [`Schedule`].
///
/// One slot per hour of the day, so pricing a record is a bounds check and
/// an array read, with no per-record branching on band boundaries.
#[derive(Clone, Debug)]
pub struct RateTable {
    rates: [KilowattHourRate; 24],
    band_indices: [usize; 24],
}

impl RateTable {
    /// Look up the rate for an hour of the day.
    ///
    /// # Errors
    ///
    /// [`InvalidHour`] outside `[0, 24)`.
    pub fn rate_for_hour(&self, hour: i64) -> Result<KilowattHourRate, InvalidHour> {
        Ok(self.rates[Self::slot(hour)?])
    }

    /// Index of the schedule band covering an hour of the day.
    ///
    /// # Errors
    ///
    /// [`InvalidHour`] outside `[0, 24)`.
    pub fn band_index_for_hour(&self, hour: i64) -> Result<usize, InvalidHour> {
        Ok(self.band_indices[Self::slot(hour)?])
    }

    fn slot(hour: i64) -> Result<usize, InvalidHour> {
        usize::try_from(hour).ok().filter(|slot| *slot < 24).ok_or(InvalidHour { hour })
    }
}

impl From<&Schedule> for RateTable {
    fn from(schedule: &Schedule) -> Self {
        let mut rates = [KilowattHourRate::ZERO; 24];
        let mut band_indices = [0; 24];
        for (index, band) in schedule.bands().iter().enumerate() {
            // The partition invariant keeps `hours()` within 0..24.
            for hour in band.hours() {
                rates[hour] = band.rate;
                band_indices[hour] = index;
            }
        }
        Self { rates, band_indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_partition_is_exhaustive() {
        let table = Schedule::default().rate_table();
        for hour in 0..24 {
            let expected = match hour {
                0..=6 => 12.0,
                7..=16 => 20.0,
                _ => 28.0,
            };
            assert_eq!(table.rate_for_hour(hour).unwrap(), KilowattHourRate::from(expected));
        }
    }

    #[test]
    fn test_band_boundaries() {
        let table = Schedule::default().rate_table();
        assert_eq!(table.rate_for_hour(6).unwrap(), KilowattHourRate::from(12.0));
        assert_eq!(table.rate_for_hour(7).unwrap(), KilowattHourRate::from(20.0));
        assert_eq!(table.rate_for_hour(16).unwrap(), KilowattHourRate::from(20.0));
        assert_eq!(table.rate_for_hour(17).unwrap(), KilowattHourRate::from(28.0));
        assert_eq!(table.rate_for_hour(23).unwrap(), KilowattHourRate::from(28.0));
    }

    #[test]
    fn test_rejects_hours_outside_the_day() {
        let table = Schedule::default().rate_table();
        assert_eq!(table.rate_for_hour(24), Err(InvalidHour { hour: 24 }));
        assert_eq!(table.rate_for_hour(-1), Err(InvalidHour { hour: -1 }));
    }

    #[test]
    fn test_band_attribution_matches_rates() {
        let schedule = Schedule::default();
        let table = schedule.rate_table();
        for hour in 0..24 {
            let band = &schedule.bands()[table.band_index_for_hour(hour).unwrap()];
            assert_eq!(table.rate_for_hour(hour).unwrap(), band.rate);
        }
    }
}
