use crate::error::Result;
use crate::model::Metric;

pub trait Encoder {
    fn encode(&self, metrics: &[Metric]) -> Result<Vec<u8>>;
}
