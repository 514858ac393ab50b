/// Rejected rate lookup outside the tariff day.
///
/// Any valid calendar timestamp yields an hour in `[0, 24)`, so hitting this
/// means the caller fed the table a malformed hour, and no band may be
/// silently substituted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("hour {hour} is outside the tariff day [0, 24)")]
pub struct InvalidHour {
    pub hour: i64,
}
