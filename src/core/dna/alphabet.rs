use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub enum ReqNucleotide {
    A,
    C,
    G,
    T,
}

impl ReqNucleotide {
    /// Nucleotides in the reporting order.
    pub const ALL: [ReqNucleotide; 4] = [ReqNucleotide::A, ReqNucleotide::C, ReqNucleotide::G, ReqNucleotide::T];

    pub const fn symbol(&self) -> char {
        match self {
            ReqNucleotide::A => 'A',
            ReqNucleotide::C => 'C',
            ReqNucleotide::G => 'G',
            ReqNucleotide::T => 'T',
        }
    }
}

impl Display for ReqNucleotide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for ReqNucleotide {
    type Error = ();

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' | 'a' => Ok(ReqNucleotide::A),
            'C' | 'c' => Ok(ReqNucleotide::C),
            'G' | 'g' => Ok(ReqNucleotide::G),
            'T' | 't' => Ok(ReqNucleotide::T),
            _ => Err(()),
        }
    }
}
