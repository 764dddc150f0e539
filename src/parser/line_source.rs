//! Line sources feeding the parser
//!
//! A line source yields text lines in order with line endings (`\n` or
//! `\r\n`) removed, and ends with `None`, which is distinct from an empty
//! final line. I/O errors are passed through as they are.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader as AsyncBufReader, Lines};

/// Open a file as a blocking line iterator
pub fn open(path: &Path) -> io::Result<io::Lines<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines())
}

/// Lines of any buffered reader
pub fn from_reader<R: BufRead>(reader: R) -> io::Lines<R> {
    reader.lines()
}

/// Lines of an in-memory string
pub fn from_text(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
    text.lines().map(|line| Ok(line.to_string()))
}

/// Open a file as an async line reader
pub async fn open_async(path: &Path) -> io::Result<Lines<AsyncBufReader<tokio::fs::File>>> {
    let file = tokio::fs::File::open(path).await?;
    Ok(AsyncBufReader::new(file).lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_crlf_and_lf_are_normalized() {
        let lines: Vec<String> = from_reader(Cursor::new("a,b\r\nc,d\ne,f"))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a,b", "c,d", "e,f"]);

        let lines: Vec<String> = from_text("a,b\r\n\r\nc,d\n")
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a,b", "", "c,d"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = open(Path::new("/nonexistent/people.csv")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_async_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name,age\r\nAlice,23\n").unwrap();

        let mut lines = open_async(file.path()).await.unwrap();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("name,age"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("Alice,23"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }
}
