use chrono::NaiveDateTime;

/// A time series point.
///
/// The timestamp is naive on purpose: only the hour-of-day is ever read by
/// the tariff logic, so zone conversions have nothing to attach to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct Point<V> {
    pub time: NaiveDateTime,
    pub value: V,
}

impl<V> Point<V> {
    pub fn map<T>(self, f: impl FnOnce(V) -> T) -> Point<T> {
        Point::new(self.time, f(self.value))
    }
}
