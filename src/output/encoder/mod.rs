mod encoder;
mod metric_api;

pub use encoder::Encoder;
pub use metric_api::MetricApiEncoder;
