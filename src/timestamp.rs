use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Month, day, hour, minute and second of the local clock, unpadded and
/// concatenated: April 1st, 09:05:07 becomes `41957`.
///
/// Only changes once per second, so it is good enough to tell apart
/// values generated by test runs started at different times.
pub fn get_current_time() -> String {
    compact_timestamp(&Local::now())
}

pub fn compact_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format("%-m%-d%-H%-M%-S").to_string()
}
