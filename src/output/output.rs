use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::Result;
use crate::model::Metric;

/// Stands in for the sending client: encodes each cycle and writes it out.
pub struct Output {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
    audit_logging: bool,
}

impl Output {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>, audit_logging: bool) -> Self {
        Self {
            writer,
            encoder,
            audit_logging,
        }
    }

    pub fn write(&mut self, metrics: &[Metric]) -> Result<()> {
        let buf = self.encoder.encode(metrics)?;

        if self.audit_logging {
            tracing::info!(
                target: "audit",
                metrics = metrics.len(),
                payload = %String::from_utf8_lossy(&buf),
                "sending metric batch"
            );
        }

        self.writer.write(&buf)?;
        Ok(())
    }
}
