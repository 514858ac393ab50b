use std::ops::Range;

use serde::Deserialize;

use crate::quantity::rate::KilowattHourRate;

/// One tariff band: a half-open range of hours `[start, end)` priced at a
/// flat rate.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Band {
    pub name: String,

    pub start_hour: u8,

    /// Exclusive; `24` closes the day.
    pub end_hour: u8,

    pub rate: KilowattHourRate,
}

impl Band {
    pub fn hours(&self) -> Range<usize> {
        usize::from(self.start_hour)..usize::from(self.end_hour)
    }

    #[must_use]
    pub const fn hour_span(&self) -> u8 {
        self.end_hour - self.start_hour
    }
}
