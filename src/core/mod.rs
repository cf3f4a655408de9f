pub mod dna;
pub mod errors;
pub mod io;
pub mod tally;
