use serde::{Deserialize, Serialize};

use super::attributes::SourceAttributes;

/// Static attributes describing the process and its environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    attributes: SourceAttributes,
}

impl Resource {
    pub fn new(attributes: SourceAttributes) -> Self {
        Self { attributes }
    }

    #[inline]
    pub fn attributes(&self) -> &SourceAttributes {
        &self.attributes
    }
}

/// Name and version of the library that recorded a metric stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentationLibraryInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl InstrumentationLibraryInfo {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }
}
