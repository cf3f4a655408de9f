/// Tabular view of a result record: one header, one row of the same width.
pub trait Table {
    const LENGTH: usize;

    fn row(&self) -> Vec<String>;
    fn header() -> Vec<String>;
}
