//! Attribute merging helpers.
//!
//! The `Cow` returned by [`populate_library_info`] and [`add_resource_attributes`]
//! is `Borrowed` (the very same set) when there is nothing to merge, and a
//! fresh `Owned` copy otherwise. Inputs are never modified.
use std::borrow::Cow;

use crate::model::{Attributes, InstrumentationLibraryInfo, Labels, Resource, SourceAttributes};

pub const SERVICE_NAME: &str = "service.name";
pub const INSTRUMENTATION_NAME: &str = "instrumentation.name";
pub const INSTRUMENTATION_VERSION: &str = "instrumentation.version";

pub fn populate_library_info<'a>(
    attributes: &'a Attributes,
    library_info: Option<&InstrumentationLibraryInfo>,
) -> Cow<'a, Attributes> {
    let library_info = match library_info {
        Some(info) => info,
        None => return Cow::Borrowed(attributes),
    };

    let mut result = attributes.clone();
    if let Some(name) = non_empty(&library_info.name) {
        result.insert(INSTRUMENTATION_NAME, name);
    }
    if let Some(version) = non_empty(&library_info.version) {
        result.insert(INSTRUMENTATION_VERSION, version);
    }
    Cow::Owned(result)
}

pub fn add_resource_attributes<'a>(
    attributes: &'a Attributes,
    resource: Option<&Resource>,
) -> Cow<'a, Attributes> {
    match resource {
        None => Cow::Borrowed(attributes),
        Some(resource) => {
            let mut result = attributes.clone();
            put_in_attributes(&mut result, resource.attributes());
            Cow::Owned(result)
        }
    }
}

/// Copies every scalar entry of `source` into `attributes`, overwriting on
/// collision. Array-valued entries are skipped.
pub fn put_in_attributes(attributes: &mut Attributes, source: &SourceAttributes) {
    for (key, value) in source {
        if let Some(value) = value.to_scalar() {
            attributes.insert(key.as_str(), value);
        }
    }
}

/// `common` overlaid with point labels. Labels win on collision.
pub fn merge_labels(common: &Attributes, labels: &Labels) -> Attributes {
    let mut result = common.clone();
    result.extend(labels.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    result
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
