use serde::Serialize;

use super::attributes::Attributes;
use super::descriptor::MetricName;
use super::timestamp::Timestamp;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Long(i64),
    Double(f64),
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Long(v)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Double(v)
    }
}

/// Amount accumulated over `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    name: MetricName,
    value: MetricValue,
    start: Timestamp,
    end: Timestamp,
    attributes: Attributes,
}

impl Count {
    pub fn new<N, V>(
        name: N,
        value: V,
        start: Timestamp,
        end: Timestamp,
        attributes: Attributes,
    ) -> Self
    where
        N: Into<MetricName>,
        V: Into<MetricValue>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            start,
            end,
            attributes,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> MetricValue {
        self.value
    }

    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Instantaneous reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    name: MetricName,
    value: MetricValue,
    timestamp: Timestamp,
    attributes: Attributes,
}

impl Gauge {
    pub fn new<N, V>(name: N, value: V, timestamp: Timestamp, attributes: Attributes) -> Self
    where
        N: Into<MetricName>,
        V: Into<MetricValue>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            timestamp,
            attributes,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> MetricValue {
        self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    name: MetricName,
    count: i64,
    sum: f64,
    min: f64,
    max: f64,
    start: Timestamp,
    end: Timestamp,
    attributes: Attributes,
}

impl Summary {
    #[allow(clippy::too_many_arguments)]
    pub fn new<N: Into<MetricName>>(
        name: N,
        count: i64,
        sum: f64,
        min: f64,
        max: f64,
        start: Timestamp,
        end: Timestamp,
        attributes: Attributes,
    ) -> Self {
        Self {
            name: name.into(),
            count,
            sum,
            min,
            max,
            start,
            end,
            attributes,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A metric record ready to be handed to the sending client.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    Count(Count),
    Gauge(Gauge),
    Summary(Summary),
}

impl From<Count> for Metric {
    fn from(m: Count) -> Self {
        Metric::Count(m)
    }
}

impl From<Gauge> for Metric {
    fn from(m: Gauge) -> Self {
        Metric::Gauge(m)
    }
}

impl From<Summary> for Metric {
    fn from(m: Summary) -> Self {
        Metric::Summary(m)
    }
}
