use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

pub use inner::NucCounts;

use crate::core::dna::ReqNucleotide;
use crate::core::io::table::Table;
use crate::core::tally::TallyTable;

// Workaround to disable snake_case warning for the struct.
// Annotating struct/fields didn't work for some reasons
mod inner {
    #![allow(non_snake_case)]

    use derive_more::{Add, AddAssign, Constructor};

    #[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Add, AddAssign, Constructor)]
    pub struct NucCounts {
        pub A: u32,
        pub C: u32,
        pub G: u32,
        pub T: u32,
    }
}

impl NucCounts {
    #[inline]
    pub const fn zeros() -> NucCounts {
        NucCounts { A: 0, C: 0, G: 0, T: 0 }
    }

    /// Saturates at `u32::MAX`. Note that `+` and `+=` do not.
    #[inline]
    pub const fn coverage(&self) -> u32 {
        self.A.saturating_add(self.C).saturating_add(self.G).saturating_add(self.T)
    }
}

impl Index<ReqNucleotide> for NucCounts {
    type Output = u32;

    fn index(&self, index: ReqNucleotide) -> &Self::Output {
        match index {
            ReqNucleotide::A => &self.A,
            ReqNucleotide::C => &self.C,
            ReqNucleotide::G => &self.G,
            ReqNucleotide::T => &self.T,
        }
    }
}

impl IndexMut<ReqNucleotide> for NucCounts {
    fn index_mut(&mut self, index: ReqNucleotide) -> &mut Self::Output {
        match index {
            ReqNucleotide::A => &mut self.A,
            ReqNucleotide::C => &mut self.C,
            ReqNucleotide::G => &mut self.G,
            ReqNucleotide::T => &mut self.T,
        }
    }
}

/// Keys are matched case-insensitively, anything that is not a nucleotide is ignored.
impl From<&'_ TallyTable> for NucCounts {
    fn from(table: &'_ TallyTable) -> Self {
        let mut counts = NucCounts::zeros();
        for (&symbol, &count) in table {
            if let Ok(nuc) = ReqNucleotide::try_from(symbol) {
                counts[nuc] = counts[nuc].saturating_add(count);
            }
        }
        counts
    }
}

/// Counts in the A, C, G, T order separated by single spaces.
impl Display for NucCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReqNucleotide::ALL.iter().map(|nuc| self[*nuc]).join(" "))
    }
}

impl Table for NucCounts {
    const LENGTH: usize = 5;

    fn row(&self) -> Vec<String> {
        ReqNucleotide::ALL
            .iter()
            .map(|nuc| self[*nuc])
            .chain(std::iter::once(self.coverage()))
            .map(|x| x.to_string())
            .collect()
    }

    fn header() -> Vec<String> {
        ReqNucleotide::ALL.iter().map(|nuc| nuc.to_string()).chain(std::iter::once("coverage".to_string())).collect()
    }
}
