use structopt::StructOpt;

use crate::model::{AttributeValue, Nanos};
use crate::utils::parse::parse_attribute;
use crate::utils::time::parse_iso_time;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nrexport",
    about = "Converts metric snapshots (one JSON array per line) into Metric API payloads"
)]
pub struct CliOpt {
    #[structopt(
        long = "service-name",
        env = "NEW_RELIC_SERVICE_NAME",
        default_value = "unknown_service"
    )]
    pub service_name: String,

    /// Extra common attribute, e.g. -a env=prod
    #[structopt(long = "attribute", short = "a", parse(try_from_str = parse_attribute), number_of_values = 1)]
    pub attributes: Vec<(String, AttributeValue)>,

    /// Resource attribute, e.g. -r host.name=box-1
    #[structopt(long = "resource", short = "r", parse(try_from_str = parse_attribute), number_of_values = 1)]
    pub resource: Vec<(String, AttributeValue)>,

    /// Start of the first reporting interval (RFC 3339), defaults to now
    #[structopt(long = "start-time", short = "s", parse(try_from_str = parse_iso_time))]
    pub start_time: Option<Nanos>,

    /// Log every outgoing payload under the `audit` target
    #[structopt(long = "audit-logging")]
    pub audit_logging: bool,
}
