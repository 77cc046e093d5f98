use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::Spectrum;

/// Header names the generator writes.
pub const WAVELENGTH_COLUMN: &str = "wavelengths";
pub const POWER_COLUMN: &str = "spectrum";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading spectrum data")]
    Read(#[source] std::io::Error),

    #[error("reading header row")]
    Header(#[source] csv::Error),

    #[error("header is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("data row {row}: value in '{column}' is not a number")]
    NotNumeric {
        row: usize,
        column: String,
        #[source]
        source: csv::Error,
    },

    #[error("data row {row} is malformed")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the generator's data file.
///
/// Layout:
/// ```text
/// # data file from generate_spectrum
/// wavelengths,spectrum
/// 900.0000000000,1.0000000000
/// ...
/// ```
/// Everything from a `#` to the end of its line is a comment, whether the
/// line starts with it or carries it after the values.
pub fn load_file(path: &Path) -> Result<Spectrum, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

#[derive(Debug, Deserialize)]
struct Row {
    wavelengths: f64,
    spectrum: f64,
}

/// Parse comma-separated spectrum data from any reader.
pub fn load_reader<R: Read>(mut reader: R) -> Result<Spectrum, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(LoadError::Read)?;
    let stripped = strip_comments(&text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(stripped.as_bytes());

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for required in [WAVELENGTH_COLUMN, POWER_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut spectrum = Spectrum::default();

    for (idx, result) in reader.deserialize::<Row>().enumerate() {
        let row_no = idx + 1;
        let row = result.map_err(|source| classify_row_error(source, row_no, &headers))?;
        spectrum.wavelengths.push(row.wavelengths);
        spectrum.power.push(row.spectrum);
    }

    Ok(spectrum)
}

/// Cut every line at its first `#` and drop lines left blank.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let data = line.find('#').map_or(line, |i| &line[..i]);
        if data.trim().is_empty() {
            continue;
        }
        out.push_str(data);
        out.push('\n');
    }
    out
}

/// Split deserialisation failures (bad number) from structural ones.
fn classify_row_error(source: csv::Error, row: usize, headers: &csv::StringRecord) -> LoadError {
    let column = match source.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|i| headers.get(i as usize))
            .map(str::to_string),
        _ => None,
    };
    match column {
        Some(column) => LoadError::NotNumeric { row, column, source },
        None => LoadError::Malformed { row, source },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn load_str(s: &str) -> Result<Spectrum, LoadError> {
        load_reader(s.as_bytes())
    }

    #[test]
    fn test_rows_become_equal_length_columns() {
        let sp = load_str("wavelengths,spectrum\n1,10\n2,20\n3,30\n").unwrap();
        assert_eq!(sp.len(), 3);
        assert_eq!(sp.wavelengths, vec![1.0, 2.0, 3.0]);
        assert_eq!(sp.power, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_comment_lines_skipped_anywhere() {
        let text = "# data file from generate_spectrum\n\
                    wavelengths,spectrum\n\
                    # between header and data\n\
                    900.5,0.99\n\
                    # in the middle\n\
                    901.5,0.5\n\
                    # trailing\n";
        let sp = load_str(text).unwrap();
        assert_eq!(sp.wavelengths, vec![900.5, 901.5]);
        assert_eq!(sp.power, vec![0.99, 0.5]);
    }

    #[test]
    fn test_inline_comment_stripped() {
        let sp = load_str("wavelengths,spectrum # header note\n1,10 # note\n2,20\n").unwrap();
        assert_eq!(sp.wavelengths, vec![1.0, 2.0]);
        assert_eq!(sp.power, vec![10.0, 20.0]);
    }

    #[test]
    fn test_indented_comment_and_blank_lines_skipped() {
        let sp = load_str("wavelengths,spectrum\n   # indented\n\n  \n3,30\n").unwrap();
        assert_eq!(sp.len(), 1);
        assert_eq!(sp.power, vec![30.0]);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let sp = load_str("spectrum,note,wavelengths\n0.25,a,4\n0.75,b,5\n").unwrap();
        assert_eq!(sp.wavelengths, vec![4.0, 5.0]);
        assert_eq!(sp.power, vec![0.25, 0.75]);
    }

    #[test]
    fn test_whitespace_around_values_is_trimmed() {
        let sp = load_str("wavelengths, spectrum\n 1.5 , 2.5\n").unwrap();
        assert_eq!(sp.wavelengths, vec![1.5]);
        assert_eq!(sp.power, vec![2.5]);
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let err = load_str("wavelengths,spectrum\n1,10\n2,abc\n").unwrap_err();
        match err {
            LoadError::NotNumeric { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "spectrum");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_not_coerced() {
        let err = load_str("wavelengths,spectrum\n1,\n").unwrap_err();
        assert!(matches!(err, LoadError::NotNumeric { row: 1, .. }));
    }

    #[test]
    fn test_missing_column() {
        let err = load_str("wavelengths,power\n1,10\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("spectrum")));

        let err = load_str("x,spectrum\n1,10\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("wavelengths")));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = load_str("wavelengths,spectrum\n1,10\n2\n").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 2, .. }));
    }

    #[test]
    fn test_header_only_gives_empty_spectrum() {
        let sp = load_str("# nothing yet\nwavelengths,spectrum\n").unwrap();
        assert!(sp.is_empty());
    }

    #[test]
    fn test_load_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("arrays.dat");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "# data file from generate_spectrum").unwrap();
        writeln!(f, "wavelengths,spectrum").unwrap();
        writeln!(f, "900.0000000000,1.0000000000").unwrap();
        writeln!(f, "900.9765625000,0.9871234500").unwrap();
        drop(f);

        let sp = load_file(&path).unwrap();
        assert_eq!(sp.len(), 2);
        assert_eq!(sp.wavelengths[1], 900.9765625);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.dat")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
