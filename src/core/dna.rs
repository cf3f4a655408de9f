pub use alphabet::ReqNucleotide;
pub use ncounts::NucCounts;

mod alphabet;
mod ncounts;
