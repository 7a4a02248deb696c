pub mod error;
pub mod lengths;
pub mod frequencies;
pub mod report;
pub mod properties;
pub mod zipf;
pub mod utils;

pub use error::{Error, Result};
pub use frequencies::FrequencyTable;
pub use lengths::{compute_lengths, calculate_minimum_redundancy};
pub use properties::Limits;
pub use report::CodeReport;

/// Runs the length calculator on a working copy of an already validated table and
/// pairs the resulting lengths with the original frequencies.
///
/// # Examples
///
/// ```
/// use inplace_codes::{FrequencyTable, Limits, analyze};
///
/// let table = FrequencyTable::read("2\n5\n7\n".as_bytes(), &Limits::default()).unwrap();
/// let report = analyze(table).unwrap();
///
/// assert_eq!(report.lengths, vec![1, 1]);
/// ```
///
/// # Errors
///
/// [`Error::AllocationFailure`] when the working copy cannot be allocated.
pub fn analyze(table: FrequencyTable) -> Result<CodeReport> {
    let lengths = compute_lengths(table.working_copy()?);
    Ok(CodeReport::new(table.into_inner(), lengths))
}
