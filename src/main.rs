use std::io::{self, BufReader};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use nrexport::cliopt::CliOpt;
use nrexport::output::{encoder::MetricApiEncoder, writer::LineWriter, Output};
use nrexport::runner::{build_exporter, Runner};

const ENV_LOG: &str = "NREXPORT_LOG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let opt = CliOpt::from_args();

    let output = Output::new(
        Box::new(LineWriter::new(io::stdout())),
        Box::new(MetricApiEncoder::new()),
        opt.audit_logging,
    );

    let mut runner = Runner::new(
        Box::new(BufReader::new(io::stdin())),
        build_exporter(&opt),
        output,
    );
    runner.run()?;

    Ok(())
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_owned());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
