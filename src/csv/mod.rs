use std::io::Read;

use csv::{ReaderBuilder, Result};

/// A CSV record, every cell kept as text.
pub type Row = Vec<String>;

/// Parse the header [`Row`] and a lazy iterator over the data [`Row`]s.
///
/// The first record is consumed immediately as the header; an empty input
/// gives an empty header. Data rows are read on demand, in source order, and
/// may have a different length than the header.
pub fn read<R: Read>(reader: R) -> Result<(Row, impl Iterator<Item = Result<Row>>)> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let header = reader.headers()?.iter().map(str::to_owned).collect();

    Ok((header, reader.into_deserialize()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn read_all(input: &str) -> (Row, Vec<Row>) {
        let (header, rows) = read(input.as_bytes()).unwrap();
        (header, rows.collect::<Result<_>>().unwrap())
    }

    #[test]
    fn splits_header_from_rows() {
        let (header, rows) = read_all("a,b\n1,2\n3,4\n");

        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn empty_input_has_empty_header() {
        let (header, rows) = read_all("");

        assert!(header.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_fields_keep_commas_newlines_and_quotes() {
        let (_, rows) = read_all("name,note\n\"Doe, J.\",\"said \"\"hi\"\"\nthen left\"\n");

        assert_eq!(rows, vec![vec!["Doe, J.", "said \"hi\"\nthen left"]]);
    }

    #[test]
    fn ragged_rows_are_not_rejected() {
        let (_, rows) = read_all("a,b,c\n1\n1,2,3,4\n");

        assert_eq!(rows, vec![vec!["1"], vec!["1", "2", "3", "4"]]);
    }

    #[test]
    fn numbers_stay_text() {
        let (_, rows) = read_all("x\n007\n1.50\n");

        assert_eq!(rows, vec![vec!["007"], vec!["1.50"]]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let (_, mut rows) = read(&b"a\n\xff\xfe\n"[..]).unwrap();

        assert!(rows.next().unwrap().is_err());
    }
}
