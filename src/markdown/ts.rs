//! Parse Slack message identifiers into instants.

use super::{error::FormatError, thread::Ts};
use chrono::{DateTime, Utc};

const NANOS_PER_SEC: i64 = 1_000_000_000;

impl Ts {
    /// The instant this identifier encodes.
    ///
    /// The part after the dot is taken as a count of nanoseconds rather than
    /// as a decimal fraction, so `"5.12"` is 12ns past the fifth second.
    /// Overflowing nanoseconds carry into the seconds.
    pub fn instant(&self) -> Result<DateTime<Utc>, FormatError> {
        parse_instant(&self.0)
    }
}

pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, FormatError> {
    let (secs, nanos) = match s.split('.').collect::<Vec<_>>()[..] {
        [secs, nanos] => (parse_part(s, secs)?, parse_part(s, nanos)?),
        _ => return Err(FormatError::Shape(s.to_owned())),
    };

    secs.checked_add(nanos.div_euclid(NANOS_PER_SEC))
        .and_then(|secs| {
            // rem_euclid keeps this within [0, 1e9).
            DateTime::from_timestamp(secs, nanos.rem_euclid(NANOS_PER_SEC) as u32)
        })
        .ok_or_else(|| FormatError::OutOfRange(s.to_owned()))
}

fn parse_part(ts: &str, part: &str) -> Result<i64, FormatError> {
    part.parse().map_err(|source| FormatError::NotInteger {
        ts: ts.to_owned(),
        source,
    })
}
