//! Console prompt used between pages.
//!
//! The question is written to stderr. Stdout carries only command output.

use colored::Colorize;
use netbox_client::paginate::Prompt;
use netbox_core::Result;
use std::io::{BufRead, Stderr, Stdin, StdinLock, Write};

/// Line-oriented prompt: writes the question, reads one line.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompt<StdinLock<'static>, Stderr> {
    /// Prompt on the process console: read stdin, ask on stderr
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Prompt over arbitrary streams
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give the output stream back
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", question.yellow().bold())?;
        self.writer.flush()?;

        // Undecodable bytes are just another unrecognized answer.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbox_client::paginate::{PageSource, PaginationOutcome, Paginator};
    use netbox_core::Page;
    use serde_json::{json, Value};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut prompt = LinePrompt::new(Cursor::new("maybe\nyes\n"), Vec::new());

        assert_eq!(prompt.ask("More? ").unwrap().as_deref(), Some("maybe\n"));
        assert_eq!(prompt.ask("More? ").unwrap().as_deref(), Some("yes\n"));
        assert_eq!(prompt.ask("More? ").unwrap(), None);

        let written = String::from_utf8(prompt.into_writer()).unwrap();
        assert_eq!(written.matches("More? ").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_an_answer() {
        let mut prompt = LinePrompt::new(Cursor::new(b"\xff\xfe\nno\n".to_vec()), Vec::new());

        let garbled = prompt.ask("More? ").unwrap().unwrap();
        assert!(garbled.contains('\u{FFFD}'));
        assert_eq!(prompt.ask("More? ").unwrap().as_deref(), Some("no\n"));
    }

    /// Always reports another page.
    struct EndlessSource {
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl PageSource<Value> for EndlessSource {
        async fn fetch_page(&self, _url: Url) -> Result<Page<Value>> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Page {
                count: 1000,
                next: Some(format!("https://netbox.example.net/api/dcim/sites/?offset={n}")),
                previous: None,
                results: vec![json!({ "id": n })],
            })
        }
    }

    #[tokio::test]
    async fn test_invalid_answer_shows_prompt_again() {
        let source = EndlessSource {
            fetches: AtomicUsize::new(0),
        };
        let prompt = LinePrompt::new(Cursor::new("maybe\nno\n"), Vec::new());

        let mut paginator = Paginator::new(&source, prompt);
        let outcome = paginator
            .run(
                Url::parse("https://netbox.example.net/api/dcim/sites/").unwrap(),
                |_: &Page<Value>| Ok(()),
            )
            .await
            .unwrap();

        assert_eq!(outcome, PaginationOutcome::Declined { pages: 1 });
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        let written = String::from_utf8(paginator.into_prompt().into_writer()).unwrap();
        assert_eq!(written.matches("Continue to next page?").count(), 2);
    }

    #[tokio::test]
    async fn test_undecodable_answer_shows_prompt_again() {
        let source = EndlessSource {
            fetches: AtomicUsize::new(0),
        };
        let prompt = LinePrompt::new(Cursor::new(b"\xff\xfe\nno\n".to_vec()), Vec::new());

        let mut paginator = Paginator::new(&source, prompt);
        let outcome = paginator
            .run(
                Url::parse("https://netbox.example.net/api/dcim/sites/").unwrap(),
                |_: &Page<Value>| Ok(()),
            )
            .await
            .unwrap();

        assert_eq!(outcome, PaginationOutcome::Declined { pages: 1 });
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
