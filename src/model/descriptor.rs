use serde::{Deserialize, Serialize};

use super::labels::Labels;

pub type MetricName = String;

/// Kind of the instrument that recorded a metric stream.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    MonotonicLong,
    MonotonicDouble,
    NonMonotonicLong,
    NonMonotonicDouble,
    Summary,
}

impl InstrumentKind {
    pub fn is_monotonic(&self) -> bool {
        matches!(
            self,
            InstrumentKind::MonotonicLong | InstrumentKind::MonotonicDouble
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub name: MetricName,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
    // Metric metadata only. Never copied into exported attributes.
    #[serde(default)]
    pub constant_labels: Labels,
}

impl MetricDescriptor {
    pub fn new<N, D, U>(
        name: N,
        description: D,
        unit: U,
        kind: InstrumentKind,
        constant_labels: Labels,
    ) -> Self
    where
        N: Into<MetricName>,
        D: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            unit: unit.into(),
            kind,
            constant_labels,
        }
    }
}
