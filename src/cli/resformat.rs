use std::io::Write;
use std::str::FromStr;

use crate::core::dna::NucCounts;
use crate::core::errors::Result;
use crate::core::io::table::Table;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum OutputFormat {
    Line,
    Tsv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Line, OutputFormat::Tsv];
    pub const NAMES: [&'static str; 2] = [OutputFormat::Line.name(), OutputFormat::Tsv.name()];

    pub const fn name(&self) -> &'static str {
        match self {
            OutputFormat::Line => "line",
            OutputFormat::Tsv => "tsv",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Line
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|x| x.name() == s)
            .ok_or_else(|| format!("Unknown output format: {}", s))
    }
}

pub fn line(mut saveto: impl Write, counts: &NucCounts) -> Result<()> {
    writeln!(saveto, "{}", counts)?;
    saveto.flush()?;
    Ok(())
}

pub fn table<T: Table>(saveto: impl Write, record: &T) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(saveto);
    writer.write_record(T::header())?;
    writer.write_record(record.row())?;
    // Records are buffered, so most I/O failures only show up here
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn counts(saveto: impl Write, format: OutputFormat, counts: &NucCounts) -> Result<()> {
    match format {
        OutputFormat::Line => line(saveto, counts),
        OutputFormat::Tsv => table(saveto, counts),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::core::errors::Error;

    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn render(format: OutputFormat, counts: &NucCounts) -> String {
        let mut saveto = Vec::new();
        super::counts(&mut saveto, format, counts).unwrap();
        String::from_utf8(saveto).unwrap()
    }

    #[test]
    fn line() {
        assert_eq!(render(OutputFormat::Line, &NucCounts::new(2, 1, 1, 1)), "2 1 1 1\n");
        assert_eq!(render(OutputFormat::Line, &NucCounts::zeros()), "0 0 0 0\n");
    }

    #[test]
    fn tsv() {
        assert_eq!(render(OutputFormat::Tsv, &NucCounts::new(2, 1, 1, 1)), "A\tC\tG\tT\tcoverage\n2\t1\t1\t1\t5\n");
        assert_eq!(render(OutputFormat::Tsv, &NucCounts::zeros()), "A\tC\tG\tT\tcoverage\n0\t0\t0\t0\t0\n");
    }

    #[test]
    fn from_str() {
        assert_eq!("line".parse::<OutputFormat>(), Ok(OutputFormat::Line));
        assert_eq!("tsv".parse::<OutputFormat>(), Ok(OutputFormat::Tsv));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Line);
        for (format, name) in OutputFormat::ALL.into_iter().zip(OutputFormat::NAMES) {
            assert_eq!(name.parse::<OutputFormat>(), Ok(format));
            assert_eq!(format.name(), name);
        }
    }

    #[test]
    fn write_failure() {
        let counts = NucCounts::new(2, 1, 1, 1);

        let result = super::counts(BrokenPipe, OutputFormat::Line, &counts);
        assert!(matches!(result, Err(Error::Io(_))));

        let result = super::counts(BrokenPipe, OutputFormat::Tsv, &counts);
        assert!(matches!(result, Err(Error::Csv(_))));
        assert!(result.unwrap_err().to_string().starts_with("Failed to write the results table"));
    }
}
