use super::adapter::MetricPointAdapter;
use super::attributes_support::{add_resource_attributes, populate_library_info, SERVICE_NAME};
use super::time_tracker::TimeTracker;
use crate::error::Error;
use crate::model::{Attributes, Metric, MetricData, MetricName, Nanos, NanosTrait, Resource, TimestampTrait};

/// A point that couldn't be converted.
#[derive(Debug)]
pub struct ExportFailure {
    pub metric: MetricName,
    pub error: Error,
}

/// Outcome of one export cycle.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub metrics: Vec<Metric>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    #[inline]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Drives one conversion cycle per collected snapshot.
///
/// Attributes are layered as common, then resource, then instrumentation
/// library, then point labels; each later layer wins on key collision.
pub struct MetricExporter {
    adapter: MetricPointAdapter,
    common_attributes: Attributes,
    resource: Option<Resource>,
}

impl MetricExporter {
    pub fn builder() -> Builder {
        Builder::default()
    }

    #[inline]
    pub fn common_attributes(&self) -> &Attributes {
        &self.common_attributes
    }

    #[inline]
    pub fn previous_time(&self) -> Nanos {
        self.adapter.time_tracker().previous_time()
    }

    /// Converts every point of the snapshot.
    ///
    /// A failing point is recorded in the report and the rest of the cycle
    /// carries on. Afterwards the shared interval boundary moves to the latest
    /// point timestamp seen in this cycle.
    pub fn export(&mut self, metrics: &[MetricData]) -> ExportReport {
        let mut report = ExportReport::default();
        let mut cycle_end: Option<Nanos> = None;

        let base = add_resource_attributes(&self.common_attributes, self.resource.as_ref());

        for data in metrics {
            let attributes = populate_library_info(base.as_ref(), data.library.as_ref());
            let descriptor = &data.descriptor;

            for point in &data.points {
                match self.adapter.build_metrics_from_point(
                    descriptor,
                    descriptor.kind,
                    attributes.as_ref(),
                    point,
                ) {
                    Ok(converted) => report.metrics.extend(converted),
                    Err(error) => {
                        tracing::warn!(metric = %descriptor.name, %error, "point conversion failed");
                        report.failures.push(ExportFailure {
                            metric: descriptor.name.clone(),
                            error,
                        });
                    }
                }
                cycle_end = cycle_end.max(Some(point.epoch_nanos()));
            }
        }

        if let Some(end) = cycle_end {
            self.adapter.time_tracker_mut().update_time(end);
        }

        tracing::debug!(
            converted = report.metrics.len(),
            failed = report.failures.len(),
            boundary = %self.previous_time().to_millis().to_string_millis(),
            "export cycle finished"
        );

        report
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    service_name: Option<String>,
    common_attributes: Attributes,
    resource: Option<Resource>,
    start_time: Nanos,
}

impl Builder {
    pub fn service_name<S: Into<String>>(mut self, name: S) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn common_attributes(mut self, attributes: Attributes) -> Self {
        self.common_attributes = attributes;
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Interval start of every counter reported in the first cycle.
    pub fn start_time(mut self, start_time: Nanos) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn build(self) -> MetricExporter {
        let mut common_attributes = self.common_attributes;
        if let Some(name) = self.service_name {
            common_attributes.insert(SERVICE_NAME, name);
        }

        MetricExporter {
            adapter: MetricPointAdapter::new(TimeTracker::new(self.start_time)),
            common_attributes,
            resource: self.resource,
        }
    }
}
