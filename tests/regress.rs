use std::io::{self, Write};

use clap::App;

use nuctally::cli;
use nuctally::core::dna::NucCounts;

fn app() -> App<'static> {
    App::new("test").args(cli::args::all())
}

fn run(args: &[&str]) -> (NucCounts, String) {
    let matches = app().get_matches_from(args);
    let mut saveto = Vec::new();
    let counts = cli::run(&matches, &mut saveto).expect("Failed to write results");
    (counts, String::from_utf8(saveto).expect("Output is not valid UTF-8"))
}

mod line {
    use super::*;

    #[test]
    fn sample() {
        let (counts, output) = run(&["test"]);
        assert_eq!(output, "207 197 215 207\n");
        assert_eq!(counts.coverage(), cli::sample::SEQUENCE.len() as u32);
    }

    #[test]
    fn sequence() {
        let (counts, output) = run(&["test", "AACGT"]);
        assert_eq!(output, "2 1 1 1\n");
        assert_eq!(counts, NucCounts::new(2, 1, 1, 1));
    }

    #[test]
    fn lowercase() {
        assert_eq!(run(&["test", "aacgt"]).1, "2 1 1 1\n");
        assert_eq!(run(&["test", "-f", "line", "AaCcGgTt"]).1, "2 2 2 2\n");
    }

    #[test]
    fn foreign_symbols() {
        assert_eq!(run(&["test", "XYZ"]).1, "0 0 0 0\n");
        assert_eq!(run(&["test", "NNNN ACGU"]).1, "1 1 1 0\n");
    }

    #[test]
    fn empty() {
        assert_eq!(run(&["test", ""]).1, "0 0 0 0\n");
    }

    #[test]
    fn repeated() {
        let first = run(&["test", "GATTACA"]);
        let second = run(&["test", "GATTACA"]);
        assert_eq!(first, second);
        assert_eq!(first.1, "3 1 1 2\n");
    }
}

mod tsv {
    use super::*;

    #[test]
    fn sample() {
        let (_, output) = run(&["test", "--format", "tsv"]);
        assert_eq!(output, "A\tC\tG\tT\tcoverage\n207\t197\t215\t207\t826\n");
    }

    #[test]
    fn sequence() {
        let (_, output) = run(&["test", "-v", "-f", "tsv", "aacgt"]);
        assert_eq!(output, "A\tC\tG\tT\tcoverage\n2\t1\t1\t1\t5\n");
    }
}

#[test]
fn unknown_format() {
    assert!(app().try_get_matches_from(&["test", "-f", "json"]).is_err());
    assert!(app().try_get_matches_from(&["test", "--format"]).is_err());
}

#[test]
fn write_failure() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    for format in ["line", "tsv"] {
        let matches = app().get_matches_from(&["test", "-f", format, "AACGT"]);
        assert!(cli::run(&matches, Closed).is_err());
    }
}
