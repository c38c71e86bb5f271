use serde::Serialize;

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::{Attributes, Metric, MetricValue, Timestamp};

// Metric API payload: a list of batches, one per request.
// [
//   {
//     "metrics": [
//       {
//         "type": "count",
//         "name": "requests",
//         "value": 5,
//         "timestamp": 1609459200000,
//         "interval.ms": 5000,
//         "attributes": {"service.name": "fooService"}
//       }
//     ]
//   }
// ]
#[derive(Serialize)]
struct Batch<'a> {
    metrics: Vec<MetricRepr<'a>>,
}

#[derive(Serialize)]
struct SummaryValueRepr {
    count: i64,
    sum: f64,
    min: f64,
    max: f64,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MetricRepr<'a> {
    Count {
        name: &'a str,
        value: MetricValue,
        timestamp: Timestamp,
        #[serde(rename = "interval.ms")]
        interval: i64,
        attributes: &'a Attributes,
    },
    Gauge {
        name: &'a str,
        value: MetricValue,
        timestamp: Timestamp,
        attributes: &'a Attributes,
    },
    Summary {
        name: &'a str,
        value: SummaryValueRepr,
        timestamp: Timestamp,
        #[serde(rename = "interval.ms")]
        interval: i64,
        attributes: &'a Attributes,
    },
}

impl<'a> MetricRepr<'a> {
    fn new(metric: &'a Metric) -> Self {
        match metric {
            Metric::Count(m) => MetricRepr::Count {
                name: m.name(),
                value: m.value(),
                timestamp: m.start(),
                interval: m.end() - m.start(),
                attributes: m.attributes(),
            },
            Metric::Gauge(m) => MetricRepr::Gauge {
                name: m.name(),
                value: m.value(),
                timestamp: m.timestamp(),
                attributes: m.attributes(),
            },
            Metric::Summary(m) => MetricRepr::Summary {
                name: m.name(),
                value: SummaryValueRepr {
                    count: m.count(),
                    sum: m.sum(),
                    min: m.min(),
                    max: m.max(),
                },
                timestamp: m.start(),
                interval: m.end() - m.start(),
                attributes: m.attributes(),
            },
        }
    }
}

pub struct MetricApiEncoder {}

impl MetricApiEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for MetricApiEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for MetricApiEncoder {
    fn encode(&self, metrics: &[Metric]) -> Result<Vec<u8>> {
        let batches = [Batch {
            metrics: metrics.iter().map(MetricRepr::new).collect(),
        }];
        Ok(serde_json::to_vec(&batches)?)
    }
}
