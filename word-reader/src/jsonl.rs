use crate::{NamedWord, ReadError};
use serde::Deserialize;
use std::io::BufRead;
use thompson_engine::Word;
use tracing::debug;

/// A JSON line is either a bare list of pairs or an object naming the word.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonLine {
    Named { id: String, word: Vec<(i64, i64)> },
    Bare(Vec<(i64, i64)>),
}

/// Parses one line of JSON-lines input.
///
/// Blank lines and lines starting with `#` yield `None`. Lines without an
/// `id` are named after their 1-based line number.
///
/// # Examples
/// - `[[1,1],[2,-1]]`
/// - `{"id": "commutator", "word": [[0,-1],[1,-1],[0,1],[1,1]]}`
pub fn parse_line(line: &str, number: usize) -> Result<Option<NamedWord>, ReadError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        debug!(line = number, "skipping line");
        return Ok(None);
    }

    let parsed: JsonLine = serde_json::from_str(trimmed).map_err(|source| ReadError::Json {
        line: number,
        source,
    })?;
    let (id, pairs) = match parsed {
        JsonLine::Named { id, word } => (id, word),
        JsonLine::Bare(word) => (number.to_string(), word),
    };

    let word = Word::from_pairs(&pairs).map_err(|source| ReadError::Term {
        location: "line",
        number,
        source,
    })?;
    Ok(Some(NamedWord::new(id, word)))
}

/// Reads every word from JSON-lines data.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<NamedWord>, ReadError> {
    let mut words = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(word) = parse_line(&line?, i + 1)? {
            words.push(word);
        }
    }
    debug!(words = words.len(), "read json words");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thompson_engine::{GeneratorTerm, WordError};

    #[test]
    fn test_parse_bare_line() {
        let named = parse_line("[[1,1],[2,-1]]", 3).unwrap().unwrap();
        assert_eq!(named.id, "3");
        assert_eq!(
            named.word.terms(),
            &[GeneratorTerm::x(1), GeneratorTerm::x_inv(2)]
        );
    }

    #[test]
    fn test_parse_named_line() {
        let named = parse_line(r#"{"id": "c", "word": [[0,-1],[0,1]]}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(named.id, "c");
        assert_eq!(named.word.len(), 2);
    }

    #[test]
    fn test_parse_empty_word() {
        let named = parse_line("[]", 1).unwrap().unwrap();
        assert!(named.word.is_empty());
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   ", 2).unwrap().is_none());
        assert!(parse_line("# x_1 x_2", 3).unwrap().is_none());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_line("[[1,1]", 7).unwrap_err();
        assert!(matches!(err, ReadError::Json { line: 7, .. }));
    }

    #[test]
    fn test_invalid_term() {
        let err = parse_line("[[1,0]]", 2).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Term {
                number: 2,
                source: WordError::InvalidExponent { exponent: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_read_json_lines() {
        let data = "# sample\n[[0,1]]\n\n{\"id\": \"w\", \"word\": [[2,-1]]}\n";
        let words = read_json_lines(data.as_bytes()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].id, "2");
        assert_eq!(words[1].id, "w");
    }
}
