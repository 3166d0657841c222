pub mod error;
pub mod extract;
pub mod preprocess;
pub mod wordlist;
pub mod writer;

use std::path::Path;

pub use error::{ConvertError, Result};
pub use extract::extract_entries;
pub use preprocess::{count_category_headers, strip_category_headers};
pub use wordlist::{ConversionSummary, Wordlist};
pub use writer::{write_csv, write_entries};

/// Read `input`, extract every entry and write them to `output` as CSV
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let wordlist = Wordlist::load_from_file(input)?;
    write_entries(output, &wordlist.entries)?;
    Ok(wordlist.summary())
}
