use clap::ArgMatches;

use crate::cli::resformat::OutputFormat;
use crate::cli::sample;

use super::args;

pub fn sequence(matches: &ArgMatches) -> &str {
    matches.value_of(args::core::SEQUENCE).unwrap_or(sample::SEQUENCE)
}

pub fn format(matches: &ArgMatches) -> OutputFormat {
    // Already validated by clap
    matches.value_of(args::output::FORMAT).and_then(|x| x.parse().ok()).unwrap_or_default()
}

pub fn verbose(matches: &ArgMatches) -> bool {
    matches.is_present(args::core::VERBOSE)
}
