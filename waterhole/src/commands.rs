use clap::arg;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

/// Every flag is optional; with none the tool reads `path.csv` and
/// `scope.csv` and writes `result1.csv` and `error.csv` in the working directory.
pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("waterhole")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("waterhole")
        .about("Probe every candidate path on every domain and record what answers")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress the progress bar and summary").required(false))
        .arg(
            arg!(-p --"paths" <PATH>)
                .required(false)
                .help("Newline-delimited list of URL paths to probe")
                .default_value("path.csv"),
        )
        .arg(
            arg!(-s --"scope" <PATH>)
                .required(false)
                .help("Newline-delimited list of domains to probe")
                .default_value("scope.csv"),
        )
        .arg(
            arg!(-o --"results" <PATH>)
                .required(false)
                .help("Where to write status codes of answered requests")
                .default_value("result1.csv"),
        )
        .arg(
            arg!(-e --"errors" <PATH>)
                .required(false)
                .help("Where to write failed requests")
                .default_value("error.csv"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(
            arg!(--"max-redirects" <NUM>)
                .required(false)
                .help("Redirects to follow before giving up on a target")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            arg!(--"user-agent" <UA>)
                .required(false)
                .help("User-Agent header to send (default: a desktop browser)"),
        )
}
