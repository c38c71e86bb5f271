use std::collections::BTreeMap;

pub type LabelName = String;

pub type LabelValue = String;

// Sorted, so a label set can be hashed and compared as a stream identity.
pub type Labels = BTreeMap<LabelName, LabelValue>;

/// Builds a label set from `(name, value)` pairs.
pub fn label_set<'a, I>(pairs: I) -> Labels
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}
