use std::collections::HashMap;

use crate::model::{Labels, MetricName, Nanos};

/// Identity of one time series: metric name plus its point labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamKey {
    name: MetricName,
    labels: Labels,
}

impl StreamKey {
    pub fn new<N: Into<MetricName>>(name: N, labels: Labels) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StreamState {
    end: Nanos,
    cycle: u64,
}

/// Interval bookkeeping for monotonic instruments.
///
/// `previous_time` is the boundary of the last export cycle and serves as the
/// interval start of any stream seen for the first time. Once a stream has
/// been reported, its next interval starts where its previous one ended, so
/// streams with different timestamps never share a start.
///
/// A stream that goes a whole cycle without being recorded is forgotten when
/// the boundary moves; if it comes back it starts over from the boundary.
#[derive(Debug)]
pub struct TimeTracker {
    previous_time: Nanos,
    cycle: u64,
    streams: HashMap<StreamKey, StreamState>,
}

impl TimeTracker {
    pub fn new(start_time: Nanos) -> Self {
        Self {
            previous_time: start_time,
            cycle: 0,
            streams: HashMap::new(),
        }
    }

    #[inline]
    pub fn previous_time(&self) -> Nanos {
        self.previous_time
    }

    /// Moves the boundary and closes the current cycle, dropping every stream
    /// not recorded since the previous call.
    pub fn update_time(&mut self, time: Nanos) {
        self.previous_time = time;

        let cycle = self.cycle;
        self.streams.retain(|_, state| state.cycle == cycle);
        self.cycle += 1;
    }

    /// Start of the interval ending at `end`. Never later than `end`.
    pub fn interval_start(&self, stream: &StreamKey, end: Nanos) -> Nanos {
        let start = match self.streams.get(stream) {
            Some(state) => state.end,
            None => self.previous_time,
        };
        start.min(end)
    }

    pub fn record(&mut self, stream: StreamKey, end: Nanos) {
        let cycle = self.cycle;
        self.streams.insert(stream, StreamState { end, cycle });
    }

    #[inline]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }
}
