//! Importing points from delimited text files.
//!
//! This is a collaborator of the clustering core, not part of it: its whole
//! contract is "produce a collection of same-dimension [`Point`]s" that can
//! be handed to a [`Clusterer`](crate::Clusterer).

use crate::error::{Error, Result};
use crate::point::Point;
use csv::ReaderBuilder;
use std::path::Path;

/// Read points from a delimited text file, one point per line.
///
/// Every field must parse as `f64`. With `has_header` the first line is
/// skipped. Rows with differing field counts are rejected by the reader, so
/// a successful import always yields same-dimension points.
///
/// # Errors
///
/// * [`Error::Csv`] for I/O failures and ragged rows.
/// * [`Error::Parse`] for non-numeric fields.
pub fn points_from_delimited<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
    has_header: bool,
) -> Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_header)
        .flexible(false)
        .from_path(path)?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;

        let mut coords = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value = field.trim().parse::<f64>().map_err(|source| Error::Parse {
                value: field.to_string(),
                source,
            })?;
            coords.push(value);
        }

        points.push(Point::new(coords));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn write(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("huddle-{}-{name}", std::process::id()));
            fs::write(&path, contents).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_import_comma_separated() {
        let file = TempFile::write("plain.csv", "1.0,2.0\n3.5,-4.0\n0,0\n");

        let points = points_from_delimited(&file.0, b',', false).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(vec![1.0, 2.0]),
                Point::new(vec![3.5, -4.0]),
                Point::new(vec![0.0, 0.0]),
            ]
        );
    }

    #[test]
    fn test_import_skips_header() {
        let file = TempFile::write("header.csv", "x,y\n1.0,2.0\n");

        let points = points_from_delimited(&file.0, b',', true).unwrap();
        assert_eq!(points, vec![Point::new(vec![1.0, 2.0])]);
    }

    #[test]
    fn test_import_semicolon_delimiter() {
        let file = TempFile::write("semi.csv", "1.0;2.0;3.0\n4.0;5.0;6.0\n");

        let points = points_from_delimited(&file.0, b';', false).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].dimension(), 3);
    }

    #[test]
    fn test_import_rejects_non_numeric_field() {
        let file = TempFile::write("bad-field.csv", "1.0,2.0\n1.0,oops\n");

        let result = points_from_delimited(&file.0, b',', false);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_import_rejects_ragged_rows() {
        let file = TempFile::write("ragged.csv", "1.0,2.0\n1.0,2.0,3.0\n");

        let result = points_from_delimited(&file.0, b',', false);
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_import_missing_file() {
        let result = points_from_delimited("does-not-exist.csv", b',', false);
        assert!(matches!(result, Err(Error::Csv(_))));
    }
}
