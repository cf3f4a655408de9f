use std::io;

use anyhow::Result;
use clap::{crate_authors, crate_name, crate_version, App, AppSettings};

use nuctally::cli;

fn main() -> Result<()> {
    let matches = App::new(crate_name!())
        .author(crate_authors!("\n"))
        .version(crate_version!())
        .max_term_width(120)
        .setting(AppSettings::DeriveDisplayOrder)
        .args(cli::args::all())
        .get_matches();

    cli::logging::init(cli::parse::verbose(&matches));

    let stdout = io::stdout();
    cli::run(&matches, stdout.lock())?;
    Ok(())
}
