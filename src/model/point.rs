use serde::{Deserialize, Serialize};

use super::labels::Labels;
use super::timestamp::Nanos;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongPoint {
    #[serde(default)]
    pub start_epoch_nanos: Nanos,
    pub epoch_nanos: Nanos,
    #[serde(default)]
    pub labels: Labels,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoublePoint {
    #[serde(default)]
    pub start_epoch_nanos: Nanos,
    pub epoch_nanos: Nanos,
    #[serde(default)]
    pub labels: Labels,
    pub value: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAtPercentile {
    pub percentile: f64,
    pub value: f64,
}

impl ValueAtPercentile {
    pub fn new(percentile: f64, value: f64) -> Self {
        Self { percentile, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub start_epoch_nanos: Nanos,
    pub epoch_nanos: Nanos,
    #[serde(default)]
    pub labels: Labels,
    pub count: i64,
    pub sum: f64,
    #[serde(default)]
    pub percentile_values: Vec<ValueAtPercentile>,
}

impl SummaryPoint {
    /// Value of the sample recorded at exactly `percentile`, if any.
    pub fn value_at(&self, percentile: f64) -> Option<f64> {
        self.percentile_values
            .iter()
            .find(|p| p.percentile == percentile)
            .map(|p| p.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataPoint {
    Long(LongPoint),
    Double(DoublePoint),
    Summary(SummaryPoint),
}

impl DataPoint {
    pub fn labels(&self) -> &Labels {
        match self {
            DataPoint::Long(p) => &p.labels,
            DataPoint::Double(p) => &p.labels,
            DataPoint::Summary(p) => &p.labels,
        }
    }

    #[inline]
    pub fn epoch_nanos(&self) -> Nanos {
        match self {
            DataPoint::Long(p) => p.epoch_nanos,
            DataPoint::Double(p) => p.epoch_nanos,
            DataPoint::Summary(p) => p.epoch_nanos,
        }
    }
}

impl From<LongPoint> for DataPoint {
    fn from(p: LongPoint) -> Self {
        DataPoint::Long(p)
    }
}

impl From<DoublePoint> for DataPoint {
    fn from(p: DoublePoint) -> Self {
        DataPoint::Double(p)
    }
}

impl From<SummaryPoint> for DataPoint {
    fn from(p: SummaryPoint) -> Self {
        DataPoint::Summary(p)
    }
}
