pub use run::run;

pub mod args;
pub mod logging;
pub mod parse;
pub mod resformat;
mod run;
pub mod sample;
