use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Header has {headers} columns but permutation {index} has {values} values")]
    ShapeMismatch {
        index: usize,
        headers: usize,
        values: usize,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Default column names: `slot1`, `slot2`, ...
pub fn slot_headers(slots: usize) -> Vec<String> {
    (1..=slots).map(|i| format!("slot{}", i)).collect()
}

/// Writes permutations as a CSV table.
///
/// # Arguments
///
/// * `writer` - Destination of the table.
/// * `headers` - Column names; one per slot.
/// * `permutations` - Permutations to write, in order.
///
/// # Return
///
/// Returns the number of records written, excluding the header.
///
/// # Errors
///
/// Returns [`TableError::ShapeMismatch`] if a permutation does not have one value per
/// header column, or an I/O error from the underlying writer.
pub fn write_csv<W, H, I>(writer: W, headers: &[H], permutations: I) -> Result<usize, TableError>
where
    W: Write,
    H: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<[usize]>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(headers.iter().map(|h| h.as_ref()))?;

    let mut written = 0;
    for (index, permutation) in permutations.into_iter().enumerate() {
        let values = permutation.as_ref();
        check_shape(index, headers.len(), values.len())?;
        csv_writer.write_record(values.iter().map(|v| v.to_string()))?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Writes one permutation per line as space-separated values.
pub fn write_plain<W, I>(mut writer: W, permutations: I) -> Result<usize, TableError>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<[usize]>,
{
    let mut written = 0;
    for permutation in permutations {
        let line = permutation
            .as_ref()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

fn check_shape(index: usize, headers: usize, values: usize) -> Result<(), TableError> {
    if headers != values {
        return Err(TableError::ShapeMismatch {
            index,
            headers,
            values,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::permutation::Cardinalities;

    #[test]
    fn slot_headers_are_one_based() {
        assert_eq!(slot_headers(3), vec!["slot1", "slot2", "slot3"]);
        assert!(slot_headers(0).is_empty());
    }

    #[test]
    fn write_csv_writes_header_and_records() {
        let mut buffer = Vec::new();
        let cardinalities = Cardinalities::new(vec![0, 2]);
        let written = write_csv(&mut buffer, &["H1", "H2"], cardinalities.permutations()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), "H1,H2\n0,1\n0,2\n");
    }

    #[test]
    fn write_csv_rejects_mismatched_shapes() {
        let mut buffer = Vec::new();
        let result = write_csv(&mut buffer, &["a"], vec![vec![1usize, 2]]);
        assert!(matches!(
            result,
            Err(TableError::ShapeMismatch {
                index: 0,
                headers: 1,
                values: 2
            })
        ));
    }

    #[test]
    fn write_plain_writes_space_separated_lines() {
        let mut buffer = Vec::new();
        let written = write_plain(&mut buffer, vec![vec![1usize, 0, 3], vec![2, 0, 1]]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 0 3\n2 0 1\n");
    }

    #[test]
    fn write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perms.csv");
        let file = std::fs::File::create(&path).unwrap();
        let set = crate::core::permutation::enumerate(&[1, 2]).unwrap();

        write_csv(file, &slot_headers(2), &set).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "slot1,slot2\n1,1\n1,2\n");
    }
}
