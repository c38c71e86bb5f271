use super::attributes_support::merge_labels;
use super::time_tracker::{StreamKey, TimeTracker};
use crate::error::{Error, Result};
use crate::model::{
    Attributes, Count, DataPoint, Gauge, InstrumentKind, Labels, Metric, MetricDescriptor,
    MetricValue, Nanos, NanosTrait, Summary, SummaryPoint,
};

const MIN_PERCENTILE: f64 = 0.0;
const MAX_PERCENTILE: f64 = 100.0;

/// Turns SDK data points into ingest metrics.
pub struct MetricPointAdapter {
    time_tracker: TimeTracker,
}

impl MetricPointAdapter {
    pub fn new(time_tracker: TimeTracker) -> Self {
        Self { time_tracker }
    }

    #[inline]
    pub fn time_tracker(&self) -> &TimeTracker {
        &self.time_tracker
    }

    #[inline]
    pub fn time_tracker_mut(&mut self) -> &mut TimeTracker {
        &mut self.time_tracker
    }

    /// Converts one point into zero or one metric.
    ///
    /// `common` ends up in every metric, overridden by the point's own labels.
    /// The descriptor's constant labels are not exported. A point whose shape
    /// does not fit `kind` yields no metric.
    pub fn build_metrics_from_point(
        &mut self,
        descriptor: &MetricDescriptor,
        kind: InstrumentKind,
        common: &Attributes,
        point: &DataPoint,
    ) -> Result<Vec<Metric>> {
        let metric = match (kind, point) {
            (InstrumentKind::MonotonicLong, DataPoint::Long(p)) => {
                self.build_count(descriptor, common, &p.labels, p.value, p.epoch_nanos)
            }
            (InstrumentKind::MonotonicDouble, DataPoint::Double(p)) => {
                self.build_count(descriptor, common, &p.labels, p.value, p.epoch_nanos)
            }
            (InstrumentKind::NonMonotonicLong, DataPoint::Long(p)) => {
                build_gauge(descriptor, common, &p.labels, p.value, p.epoch_nanos)
            }
            (InstrumentKind::NonMonotonicDouble, DataPoint::Double(p)) => {
                build_gauge(descriptor, common, &p.labels, p.value, p.epoch_nanos)
            }
            (InstrumentKind::Summary, DataPoint::Summary(p)) => {
                build_summary(descriptor, common, p)?
            }
            (kind, point) => {
                tracing::warn!(
                    metric = %descriptor.name,
                    ?kind,
                    point = point_kind(point),
                    "point doesn't match the instrument kind, skipping"
                );
                return Ok(vec![]);
            }
        };

        Ok(vec![metric])
    }

    fn build_count<V: Into<MetricValue>>(
        &mut self,
        descriptor: &MetricDescriptor,
        common: &Attributes,
        labels: &Labels,
        value: V,
        epoch_nanos: Nanos,
    ) -> Metric {
        let stream = StreamKey::new(descriptor.name.as_str(), labels.clone());
        let start = self.time_tracker.interval_start(&stream, epoch_nanos);
        self.time_tracker.record(stream, epoch_nanos);

        Count::new(
            descriptor.name.as_str(),
            value,
            start.to_millis(),
            epoch_nanos.to_millis(),
            merge_labels(common, labels),
        )
        .into()
    }
}

fn build_gauge<V: Into<MetricValue>>(
    descriptor: &MetricDescriptor,
    common: &Attributes,
    labels: &Labels,
    value: V,
    epoch_nanos: Nanos,
) -> Metric {
    Gauge::new(
        descriptor.name.as_str(),
        value,
        epoch_nanos.to_millis(),
        merge_labels(common, labels),
    )
    .into()
}

fn build_summary(
    descriptor: &MetricDescriptor,
    common: &Attributes,
    point: &SummaryPoint,
) -> Result<Metric> {
    let min = point
        .value_at(MIN_PERCENTILE)
        .ok_or_else(|| Error::missing_percentile(descriptor.name.as_str(), MIN_PERCENTILE))?;
    let max = point
        .value_at(MAX_PERCENTILE)
        .ok_or_else(|| Error::missing_percentile(descriptor.name.as_str(), MAX_PERCENTILE))?;

    Ok(Summary::new(
        descriptor.name.as_str(),
        point.count,
        point.sum,
        min,
        max,
        point.start_epoch_nanos.to_millis(),
        point.epoch_nanos.to_millis(),
        merge_labels(common, &point.labels),
    )
    .into())
}

fn point_kind(point: &DataPoint) -> &'static str {
    match point {
        DataPoint::Long(_) => "long",
        DataPoint::Double(_) => "double",
        DataPoint::Summary(_) => "summary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::attributes_support::SERVICE_NAME;
    use crate::model::{label_set, DoublePoint, LongPoint, Timestamp, TimestampTrait, ValueAtPercentile};

    fn adapter_at(previous_millis: Timestamp) -> MetricPointAdapter {
        MetricPointAdapter::new(TimeTracker::new(previous_millis.to_nanos()))
    }

    fn descriptor(kind: InstrumentKind) -> MetricDescriptor {
        MetricDescriptor::new(
            "metricName",
            "metricDescription",
            "units",
            kind,
            label_set(vec![("commonKey", "commonValue")]),
        )
    }

    fn common() -> Attributes {
        Attributes::new().put(SERVICE_NAME, "fooService")
    }

    fn expected_attributes() -> Attributes {
        common().put("specificKey", "specificValue")
    }

    fn long_point(value: i64) -> DataPoint {
        LongPoint {
            start_epoch_nanos: 100,
            epoch_nanos: (10_000 as Timestamp).to_nanos(),
            labels: label_set(vec![("specificKey", "specificValue")]),
            value,
        }
        .into()
    }

    fn double_point(value: f64) -> DataPoint {
        DoublePoint {
            start_epoch_nanos: 100,
            epoch_nanos: (10_000 as Timestamp).to_nanos(),
            labels: label_set(vec![("specificKey", "specificValue")]),
            value,
        }
        .into()
    }

    fn summary_point(percentiles: Vec<ValueAtPercentile>) -> DataPoint {
        SummaryPoint {
            start_epoch_nanos: (9_000 as Timestamp).to_nanos(),
            epoch_nanos: (10_000 as Timestamp).to_nanos(),
            labels: label_set(vec![("specificKey", "specificValue")]),
            count: 200,
            sum: 123.55,
            percentile_values: percentiles,
        }
        .into()
    }

    #[test]
    fn test_long_point() -> Result<()> {
        let mut adapter = adapter_at(9_000);
        let common = common();

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::MonotonicLong),
            InstrumentKind::MonotonicLong,
            &common,
            &long_point(123),
        )?;

        let expected = Count::new("metricName", 123i64, 9_000, 10_000, expected_attributes());
        assert_eq!(vec![Metric::from(expected)], result);
        assert_eq!(Attributes::new().put(SERVICE_NAME, "fooService"), common);
        Ok(())
    }

    #[test]
    fn test_long_point_non_monotonic() -> Result<()> {
        let mut adapter = adapter_at(9_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::NonMonotonicLong),
            InstrumentKind::NonMonotonicLong,
            &common(),
            &long_point(123),
        )?;

        let expected = Gauge::new("metricName", 123i64, 10_000, expected_attributes());
        assert_eq!(vec![Metric::from(expected)], result);
        assert_eq!(0, adapter.time_tracker().stream_count());
        Ok(())
    }

    #[test]
    fn test_double_point() -> Result<()> {
        let mut adapter = adapter_at(9_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::MonotonicDouble),
            InstrumentKind::MonotonicDouble,
            &common(),
            &double_point(123.55),
        )?;

        let expected = Count::new("metricName", 123.55, 9_000, 10_000, expected_attributes());
        assert_eq!(vec![Metric::from(expected)], result);
        Ok(())
    }

    #[test]
    fn test_double_point_non_monotonic() -> Result<()> {
        let mut adapter = adapter_at(9_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::NonMonotonicDouble),
            InstrumentKind::NonMonotonicDouble,
            &common(),
            &double_point(123.55),
        )?;

        let expected = Gauge::new("metricName", 123.55, 10_000, expected_attributes());
        assert_eq!(vec![Metric::from(expected)], result);
        Ok(())
    }

    #[test]
    fn test_summary_point() -> Result<()> {
        // The tracker boundary is deliberately different from the point's start.
        let mut adapter = adapter_at(1_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::Summary),
            InstrumentKind::Summary,
            &common(),
            &summary_point(vec![
                ValueAtPercentile::new(0.0, 5.5),
                ValueAtPercentile::new(100.0, 100.01),
            ]),
        )?;

        let expected = Summary::new(
            "metricName",
            200,
            123.55,
            5.5,
            100.01,
            9_000,
            10_000,
            expected_attributes(),
        );
        assert_eq!(vec![Metric::from(expected)], result);
        Ok(())
    }

    #[test]
    fn test_summary_point_missing_max() {
        let mut adapter = adapter_at(9_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::Summary),
            InstrumentKind::Summary,
            &common(),
            &summary_point(vec![
                ValueAtPercentile::new(0.0, 5.5),
                ValueAtPercentile::new(99.0, 90.0),
            ]),
        );

        match result {
            Err(Error::MissingPercentileBoundary { metric, percentile }) => {
                assert_eq!("metricName", metric);
                assert_eq!(100.0, percentile);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_point_yields_nothing() -> Result<()> {
        let mut adapter = adapter_at(9_000);

        let result = adapter.build_metrics_from_point(
            &descriptor(InstrumentKind::Summary),
            InstrumentKind::Summary,
            &common(),
            &long_point(1),
        )?;

        assert!(result.is_empty());
        Ok(())
    }

    #[test]
    fn test_counter_intervals_follow_the_stream() -> Result<()> {
        let mut adapter = adapter_at(9_000);
        let descriptor = descriptor(InstrumentKind::MonotonicLong);

        adapter.build_metrics_from_point(
            &descriptor,
            InstrumentKind::MonotonicLong,
            &common(),
            &long_point(1),
        )?;
        let other_stream = LongPoint {
            start_epoch_nanos: 0,
            epoch_nanos: (10_500 as Timestamp).to_nanos(),
            labels: label_set(vec![("specificKey", "otherValue")]),
            value: 7,
        };
        let next_cycle = LongPoint {
            start_epoch_nanos: 0,
            epoch_nanos: (15_000 as Timestamp).to_nanos(),
            labels: label_set(vec![("specificKey", "specificValue")]),
            value: 2,
        };

        let other = adapter.build_metrics_from_point(
            &descriptor,
            InstrumentKind::MonotonicLong,
            &common(),
            &other_stream.into(),
        )?;
        let next = adapter.build_metrics_from_point(
            &descriptor,
            InstrumentKind::MonotonicLong,
            &common(),
            &next_cycle.into(),
        )?;

        match (&other[..], &next[..]) {
            ([Metric::Count(other)], [Metric::Count(next)]) => {
                assert_eq!((9_000, 10_500), (other.start(), other.end()));
                assert_eq!((10_000, 15_000), (next.start(), next.end()));
                assert_eq!(MetricValue::Long(2), next.value());
            }
            unexpected => panic!("unexpected metrics {:?}", unexpected),
        }
        Ok(())
    }
}
