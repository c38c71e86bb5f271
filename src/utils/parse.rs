use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::AttributeValue;

lazy_static! {
    static ref KEY_VALUE: Regex = Regex::new(r"^\s*([^=\s]+)\s*=(.*)$").unwrap();
}

/// Parses a `key=value` pair, typing the value as bool, int, double or
/// string, in that order of preference.
pub fn parse_attribute(s: &str) -> Result<(String, AttributeValue)> {
    let caps = KEY_VALUE
        .captures(s)
        .ok_or_else(|| Error::InvalidAttribute(s.to_owned()))?;

    Ok((caps[1].to_owned(), parse_value(&caps[2])))
}

fn parse_value(raw: &str) -> AttributeValue {
    match raw {
        "true" => return AttributeValue::Bool(true),
        "false" => return AttributeValue::Bool(false),
        _ => (),
    }

    if let Ok(n) = raw.parse::<i64>() {
        return AttributeValue::Int(n);
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => AttributeValue::Double(n),
        _ => AttributeValue::String(raw.to_owned()),
    }
}
