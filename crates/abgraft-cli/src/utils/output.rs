use crate::cli::OutputFormat;
use crate::error::Result;
use abgraft::core::io::table;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Buffered writer to `path`, or to standard output when no path is given.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!("Writing output to file: {:?}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Writes permutations in the requested format, returning how many were written.
pub fn write_permutations<W, H, I>(
    writer: W,
    format: OutputFormat,
    headers: &[H],
    permutations: I,
) -> Result<usize>
where
    W: Write,
    H: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<[usize]>,
{
    let written = match format {
        OutputFormat::Plain => table::write_plain(writer, permutations)?,
        OutputFormat::Csv => table::write_csv(writer, headers, permutations)?,
    };
    Ok(written)
}
