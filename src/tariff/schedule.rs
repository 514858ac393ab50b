use itertools::Itertools;
use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::rate::KilowattHourRate,
    tariff::{Band, RateTable},
};

/// An ordered set of tariff bands partitioning the day `[0, 24)`.
///
/// Every constructed schedule satisfies the partition invariant: the first
/// band opens at hour 0, the last closes at hour 24, and consecutive bands
/// touch exactly, leaving no gaps and no overlaps.
#[derive(Clone, Debug)]
pub struct Schedule {
    bands: Vec<Band>,
}

impl Schedule {
    pub fn try_new(bands: Vec<Band>) -> Result<Self> {
        ensure!(!bands.is_empty(), "a tariff schedule needs at least one band");
        for band in &bands {
            ensure!(
                band.start_hour < band.end_hour,
                "band `{}` is empty or inverted: [{}, {})",
                band.name,
                band.start_hour,
                band.end_hour,
            );
        }
        if let Some(first) = bands.first() {
            ensure!(
                first.start_hour == 0,
                "the day must open at hour 0, but `{}` starts at {}",
                first.name,
                first.start_hour,
            );
        }
        if let Some(last) = bands.last() {
            ensure!(
                last.end_hour == 24,
                "the day must close at hour 24, but `{}` ends at {}",
                last.name,
                last.end_hour,
            );
        }
        for (earlier, later) in bands.iter().tuple_windows() {
            ensure!(
                later.start_hour == earlier.end_hour,
                "`{}` ends at {} but `{}` starts at {}",
                earlier.name,
                earlier.end_hour,
                later.name,
                later.start_hour,
            );
        }
        Ok(Self { bands })
    }

    /// Parse a `[[bands]]` TOML document and validate it as a schedule.
    pub fn from_toml(text: &str) -> Result<Self> {
        let document: ScheduleDocument =
            toml::from_str(text).context("failed to parse the tariff schedule")?;
        Self::try_new(document.bands)
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    #[must_use]
    pub fn rate_table(&self) -> RateTable {
        RateTable::from(self)
    }
}

impl Default for Schedule {
    /// The built-in three-band day: off-peak nights, shoulder daytime, peak
    /// evenings.
    fn default() -> Self {
        Self {
            bands: vec![
                Band {
                    name: "off-peak".to_string(),
                    start_hour: 0,
                    end_hour: 7,
                    rate: KilowattHourRate::from(12.0),
                },
                Band {
                    name: "shoulder".to_string(),
                    start_hour: 7,
                    end_hour: 17,
                    rate: KilowattHourRate::from(20.0),
                },
                Band {
                    name: "peak".to_string(),
                    start_hour: 17,
                    end_hour: 24,
                    rate: KilowattHourRate::from(28.0),
                },
            ],
        }
    }
}

#[derive(Deserialize)]
struct ScheduleDocument {
    bands: Vec<Band>,
}
