mod attributes;
mod descriptor;
mod labels;
mod metric;
mod point;
mod resource;
mod timestamp;

pub use attributes::*;
pub use descriptor::*;
pub use labels::*;
pub use metric::*;
pub use point::*;
pub use resource::*;
pub use timestamp::*;

use serde::{Deserialize, Serialize};

/// One metric stream as collected from the instrumentation SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    pub descriptor: MetricDescriptor,
    #[serde(default)]
    pub library: Option<InstrumentationLibraryInfo>,
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl MetricData {
    pub fn new(
        descriptor: MetricDescriptor,
        library: Option<InstrumentationLibraryInfo>,
        points: Vec<DataPoint>,
    ) -> Self {
        Self {
            descriptor,
            library,
            points,
        }
    }
}
