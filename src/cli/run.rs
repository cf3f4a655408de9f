use std::io::Write;

use clap::ArgMatches;
use tracing::info;

use crate::core::dna::NucCounts;
use crate::core::errors::Result;
use crate::core::tally::SymbolTally;

use super::{parse, resformat};

pub fn run(matches: &ArgMatches, saveto: impl Write) -> Result<NucCounts> {
    let sequence = parse::sequence(matches);
    let format = parse::format(matches);

    let table = SymbolTally::nucleotides().tally(sequence);
    let counts = NucCounts::from(&table);
    info!(?format, coverage = counts.coverage(), "Writing nucleotide counts");

    resformat::counts(saveto, format, &counts)?;
    Ok(counts)
}
