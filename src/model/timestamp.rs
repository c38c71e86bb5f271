use chrono::prelude::*;

// Unix timestamp in nanoseconds, as recorded by the instrumentation SDK.
pub type Nanos = i64;

// Unix timestamp in milliseconds, as expected by the ingest API.
pub type Timestamp = i64;

const NANOS_PER_MILLI: i64 = 1_000_000;

pub trait NanosTrait {
    fn to_millis(&self) -> Timestamp;
}

impl NanosTrait for Nanos {
    // Truncates towards zero.
    #[inline]
    fn to_millis(&self) -> Timestamp {
        *self / NANOS_PER_MILLI
    }
}

pub trait TimestampTrait {
    fn to_nanos(&self) -> Nanos;
    fn to_string_millis(&self) -> String;
}

impl TimestampTrait for Timestamp {
    // Saturates at the i64 bounds, roughly year 2262.
    #[inline]
    fn to_nanos(&self) -> Nanos {
        self.checked_mul(NANOS_PER_MILLI).unwrap_or(if *self < 0 {
            Nanos::MIN
        } else {
            Nanos::MAX
        })
    }

    fn to_string_millis(&self) -> String {
        match Utc.timestamp_millis_opt(*self).single() {
            Some(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_to_millis_truncates() {
        assert_eq!(10_000, (10_000_000_000 as Nanos).to_millis());
        assert_eq!(10_000, (10_000_999_999 as Nanos).to_millis());
        assert_eq!(0, (999_999 as Nanos).to_millis());
    }

    #[test]
    fn test_to_string_millis() {
        assert_eq!(
            "2021-01-01T00:00:00.100Z",
            (1609459200100 as Timestamp).to_string_millis()
        );
    }

    #[test]
    fn test_to_nanos_saturates() {
        assert_eq!(9_000_000_000, (9_000 as Timestamp).to_nanos());
        assert_eq!(Nanos::MAX, Timestamp::MAX.to_nanos());
        assert_eq!(Nanos::MIN, (Timestamp::MIN / 2).to_nanos());
    }
}
