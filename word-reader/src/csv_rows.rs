use crate::{NamedWord, ReadError, WordCollector};
use serde::Deserialize;
use std::io::Read;
use thompson_engine::GeneratorTerm;
use tracing::debug;

/// One CSV row: a single letter of the word named `word`.
///
/// Columns are `word,index,exponent`. A row with both `index` and
/// `exponent` empty only declares the word, which lets a file contain the
/// empty word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermRow {
    pub word: String,
    pub index: Option<i64>,
    pub exponent: Option<i64>,
}

/// Validates a row and returns its letter, or `None` for a declaration row.
///
/// # Arguments
/// * `row` - The deserialized CSV row
/// * `record` - 1-based record number, used in error messages
pub fn parse_row(row: &TermRow, record: usize) -> Result<Option<GeneratorTerm>, ReadError> {
    match (row.index, row.exponent) {
        (None, None) => Ok(None),
        (Some(index), Some(exponent)) => GeneratorTerm::try_from((index, exponent))
            .map(Some)
            .map_err(|source| ReadError::Term {
                location: "record",
                number: record,
                source,
            }),
        _ => Err(ReadError::IncompleteTerm { record }),
    }
}

/// Reads every word from CSV data with a `word,index,exponent` header.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<NamedWord>, ReadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut collector = WordCollector::new();
    for (i, result) in csv_reader.deserialize().enumerate() {
        let record = i + 1;
        let row: TermRow = result.map_err(|source| ReadError::Csv { record, source })?;
        let word = collector.word_mut(&row.word);
        if let Some(term) = parse_row(&row, record)? {
            word.push(term);
        }
    }

    debug!(words = collector.word_count(), "read csv words");
    Ok(collector.into_words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use thompson_engine::{Word, WordError};

    fn row(word: &str, index: Option<i64>, exponent: Option<i64>) -> TermRow {
        TermRow {
            word: word.to_string(),
            index,
            exponent,
        }
    }

    #[test]
    fn test_parse_row_letter() {
        let term = parse_row(&row("w", Some(3), Some(-1)), 1).unwrap();
        assert_eq!(term, Some(GeneratorTerm::x_inv(3)));
    }

    #[test]
    fn test_parse_row_declaration() {
        assert_eq!(parse_row(&row("w", None, None), 1).unwrap(), None);
    }

    #[test]
    fn test_parse_row_incomplete() {
        let err = parse_row(&row("w", Some(3), None), 4).unwrap_err();
        assert!(matches!(err, ReadError::IncompleteTerm { record: 4 }));
    }

    #[test]
    fn test_parse_row_invalid_exponent() {
        let err = parse_row(&row("w", Some(3), Some(5)), 2).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Term {
                number: 2,
                source: WordError::InvalidExponent { exponent: 5 },
                ..
            }
        ));
    }

    #[test]
    fn test_read_csv_groups_rows() {
        let data = "word,index,exponent\n\
                    a,1,1\n\
                    b,0,-1\n\
                    a,2,-1\n\
                    e,,\n";
        let words = read_csv(data.as_bytes()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], NamedWord::new("a", Word::from_pairs(&[(1, 1), (2, -1)]).unwrap()));
        assert_eq!(words[1], NamedWord::new("b", Word::from_pairs(&[(0, -1)]).unwrap()));
        assert_eq!(words[2], NamedWord::new("e", Word::new()));
    }

    #[test]
    fn test_read_csv_reports_record() {
        let data = "word,index,exponent\na,1,1\na,-3,1\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Term {
                number: 2,
                source: WordError::NegativeIndex { index: -3 },
                ..
            }
        ));
    }

    #[test]
    fn test_read_csv_rejects_non_integer() {
        let data = "word,index,exponent\na,one,1\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Csv { record: 1, .. }));
    }
}
