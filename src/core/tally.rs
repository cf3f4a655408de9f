use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::core::dna::ReqNucleotide;

/// Occurrences of each recognized symbol. Counts saturate at `u32::MAX`.
pub type TallyTable = BTreeMap<char, u32>;

/// Counts occurrences of a fixed set of symbols in a sequence.
///
/// Both the recognized symbols and the scanned sequence are upper-cased, so that
/// `"aacgt"` and `"AACGT"` give the same tally. Characters outside of the set are skipped.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SymbolTally {
    recognized: BTreeSet<char>,
}

impl SymbolTally {
    pub fn new(recognized: impl IntoIterator<Item = char>) -> Self {
        Self { recognized: recognized.into_iter().map(normalize).collect() }
    }

    /// The {A, C, G, T} alphabet.
    pub fn nucleotides() -> Self {
        Self::new(ReqNucleotide::ALL.iter().map(ReqNucleotide::symbol))
    }

    pub fn recognized(&self) -> impl Iterator<Item = char> + '_ {
        self.recognized.iter().copied()
    }

    pub fn tally(&self, sequence: &str) -> TallyTable {
        let mut table: TallyTable = self.recognized.iter().map(|&symbol| (symbol, 0)).collect();

        for symbol in sequence.chars().flat_map(char::to_uppercase) {
            if let Some(count) = table.get_mut(&symbol) {
                *count = count.saturating_add(1);
            }
        }

        debug!(
            scanned = sequence.chars().count(),
            recognized = table.values().sum::<u32>(),
            "Tallied {} symbol(s)",
            table.len()
        );
        table
    }
}

pub fn tally(sequence: &str, recognized: &[char]) -> TallyTable {
    SymbolTally::new(recognized.iter().copied()).tally(sequence)
}

// Symbols without a single-char upper case (e.g. 'ß') are kept as is: they never match.
fn normalize(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => symbol,
    }
}
