//! Edge-list file reader
//!
//! One edge per line, endpoints separated by whitespace or commas. Only the
//! first two columns are used; weights and other trailing columns are ignored.
//! Blank lines and everything after the comment marker are skipped.

use netsummary::{GraphBuilder, GraphError, GraphStore};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub directed: bool,
    /// Comment marker; empty disables comment handling
    pub comment: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            directed: false,
            comment: "#".to_string(),
        }
    }
}

pub fn read_edge_list(path: &Path, options: &ReadOptions) -> Result<GraphStore, ReadError> {
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file), options)
}

/// Parse an edge list. Row numbers in errors are 1-based file line numbers.
pub fn parse_edge_list<R: BufRead>(reader: R, options: &ReadOptions) -> Result<GraphStore, ReadError> {
    let mut builder = GraphBuilder::new(options.directed);

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let content = if options.comment.is_empty() {
            line.as_str()
        } else {
            line.split(options.comment.as_str()).next().unwrap_or_default()
        };

        let tokens: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .take(2)
            .collect();
        if tokens.is_empty() {
            continue;
        }

        // A single token is passed through so the builder reports the row
        builder.add_row_at(i + 1, &tokens)?;
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(text: &str, directed: bool) -> Result<GraphStore, ReadError> {
        let options = ReadOptions {
            directed,
            ..ReadOptions::default()
        };
        parse_edge_list(Cursor::new(text), &options)
    }

    #[test]
    fn test_whitespace_and_commas() {
        let store = parse("a b\nb,c\nc\td 0.5\n", false).unwrap();
        assert_eq!(store.node_count(), 4);
        assert_eq!(store.edge_count(), 3);
        assert!(store.contains("d"));
        assert!(!store.contains("0.5"));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let store = parse("# header\n\n1 2 # trailing note\n   \n2 3\n", true).unwrap();
        assert_eq!(store.edge_count(), 2);
        assert!(store.is_directed());
    }

    #[test]
    fn test_short_row_reports_line_number() {
        let err = parse("a b\n# skip\nlonely\n", false).unwrap_err();
        match err {
            ReadError::Graph(GraphError::MalformedInput { row, .. }) => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_comment_marker() {
        let options = ReadOptions {
            directed: false,
            comment: "%".to_string(),
        };
        let store = parse_edge_list(Cursor::new("% matrix market style\nx y\n"), &options).unwrap();
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A B").unwrap();
        writeln!(file, "B C").unwrap();
        let store = read_edge_list(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_edge_list(&dir.path().join("absent.txt"), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }
}
