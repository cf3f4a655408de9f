use clap::Arg;

use super::resformat::OutputFormat;

pub mod core {
    use super::*;
    pub const SEQUENCE: &str = "sequence";
    pub const VERBOSE: &str = "verbose";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(SEQUENCE)
                .index(1)
                .takes_value(true)
                .value_name("SEQUENCE")
                .long_help(
                    "DNA sequence to tally. Symbols are matched case-insensitively, \
                    everything outside of A, C, G, T is skipped. \
                    By default, the built-in sample sequence is used.",
                ),
            Arg::new(VERBOSE)
                .short('v')
                .long(VERBOSE)
                .takes_value(false)
                .long_help("Print debug messages to stderr. Finer control is available via the RUST_LOG variable."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod output {
    use super::*;
    pub const FORMAT: &str = "format";

    pub const SECTION_NAME: &str = "Output";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![Arg::new(FORMAT)
            .short('f')
            .long(FORMAT)
            .takes_value(true)
            .possible_values(OutputFormat::NAMES)
            .default_value("line")
            .long_help(
                "Output format. \"line\" prints the A, C, G, T counts separated by single spaces; \
                \"tsv\" prints a tab-separated table with a header and an extra coverage column.",
            )];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(output::args().into_iter()).collect()
}
