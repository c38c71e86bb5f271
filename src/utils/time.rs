use chrono::prelude::*;

use crate::error::{Error, Result};
use crate::model::Nanos;

pub fn parse_iso_time(s: &str) -> Result<Nanos> {
    let ts = s
        .parse::<DateTime<Utc>>()
        .map_err(|e| Error::InvalidTimestamp(s.to_owned(), e))?;
    Ok(to_nanos(&ts))
}

pub fn now() -> Nanos {
    to_nanos(&Utc::now())
}

// Saturates outside of the years 1677..2262.
fn to_nanos(ts: &DateTime<Utc>) -> Nanos {
    ts.timestamp_nanos_opt().unwrap_or_else(|| {
        if ts.timestamp() < 0 {
            Nanos::MIN
        } else {
            Nanos::MAX
        }
    })
}
