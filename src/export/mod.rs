mod adapter;
mod attributes_support;
mod exporter;
mod time_tracker;

pub use adapter::MetricPointAdapter;
pub use attributes_support::*;
pub use exporter::{Builder, ExportFailure, ExportReport, MetricExporter};
pub use time_tracker::{StreamKey, TimeTracker};
