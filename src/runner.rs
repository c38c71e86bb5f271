use std::io::BufRead;

use crate::cliopt::CliOpt;
use crate::error::Result;
use crate::export::MetricExporter;
use crate::model::{AnyValue, Attributes, MetricData, Resource};
use crate::output::Output;
use crate::utils::time;

// stdin
//   -> line: JSON snapshot, one per export cycle
//     -> Vec<MetricData>(descriptor, library, points)
//       -> MetricExporter (attributes layering + MetricPointAdapter)
//         -> Vec<Metric>(Count | Gauge | Summary)
//           -> Encoder -> Writer
//             -> stdout

pub struct Runner {
    reader: Box<dyn BufRead>,
    exporter: MetricExporter,
    output: Output,
}

impl Runner {
    pub fn new(reader: Box<dyn BufRead>, exporter: MetricExporter, output: Output) -> Self {
        Self {
            reader,
            exporter,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        let mut line_no = 0usize;

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break; // EOF
            }
            line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let snapshot: Vec<MetricData> = match serde_json::from_str(&line) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(line = line_no, error = %e, "snapshot decoding failed, skipping");
                    continue;
                }
            };

            let report = self.exporter.export(&snapshot);
            self.output.write(&report.metrics)?;
        }

        Ok(())
    }
}

pub fn build_exporter(opt: &CliOpt) -> MetricExporter {
    let mut common = Attributes::new();
    common.extend(opt.attributes.iter().cloned());

    let mut builder = MetricExporter::builder()
        .service_name(opt.service_name.as_str())
        .common_attributes(common)
        .start_time(opt.start_time.unwrap_or_else(time::now));

    if !opt.resource.is_empty() {
        builder = builder.resource(Resource::new(
            opt.resource
                .iter()
                .map(|(k, v)| (k.clone(), AnyValue::from(v.clone())))
                .collect(),
        ));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use std::io;

    use structopt::StructOpt;

    use super::*;
    use crate::export::SERVICE_NAME;
    use crate::output::encoder::MetricApiEncoder;
    use crate::output::writer::Writer;

    struct NullWriter;

    impl Writer for NullWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_build_exporter() {
        let opt = CliOpt::from_iter(&[
            "nrexport",
            "--service-name",
            "fooService",
            "-a",
            "service.name=overridden",
            "-a",
            "env=prod",
            "--start-time",
            "1970-01-01T00:00:09Z",
        ]);

        let exporter = build_exporter(&opt);

        assert_eq!(
            Attributes::new()
                .put(SERVICE_NAME, "fooService")
                .put("env", "prod"),
            *exporter.common_attributes()
        );
        assert_eq!(9_000_000_000, exporter.previous_time());
    }

    #[test]
    fn test_run_skips_malformed_lines() -> Result<()> {
        let input = concat!(
            "not json\n",
            "\n",
            r#"[{"descriptor":{"name":"queue","type":"NON_MONOTONIC_LONG"},"points":[{"long":{"epoch_nanos":2000000000,"value":4}}]}]"#,
            "\n",
        );
        let exporter = MetricExporter::builder().service_name("svc").build();
        let output = Output::new(Box::new(NullWriter), Box::new(MetricApiEncoder::new()), false);

        let mut runner = Runner::new(Box::new(io::Cursor::new(input)), exporter, output);
        runner.run()?;

        assert_eq!(2_000_000_000, runner.exporter.previous_time());
        Ok(())
    }
}
