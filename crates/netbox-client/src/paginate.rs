//! Operator-confirmed pagination over list endpoints.
//!
//! [`Paginator::run`] fetches the first page, hands it to a display callback,
//! and while the server reports a `next` page asks the operator whether to
//! continue. Only an explicit yes fetches another page; unrecognized answers
//! ask again without fetching.

use crate::NetboxClient;
use async_trait::async_trait;
use netbox_core::{NetboxError, Page, Result};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Question shown between pages
pub const QUESTION: &str = "Continue to next page? (y/n): ";

/// Anything that can fetch one page of a list endpoint.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch the page at `url`
    async fn fetch_page(&self, url: Url) -> Result<Page<T>>;
}

#[async_trait]
impl<T> PageSource<T> for NetboxClient
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, url: Url) -> Result<Page<T>> {
        self.list(url).await
    }
}

/// Source of operator answers.
pub trait Prompt {
    /// Show `question` and read one line. `None` means input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// A recognized operator answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Fetch the next page
    Yes,
    /// Stop here
    No,
}

impl Answer {
    /// Parse `y`, `yes`, `n` or `no` in any case. Anything else is `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Self::Yes),
            "n" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// How a pagination walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationOutcome {
    /// The last page was reached
    Done {
        /// Pages fetched and displayed
        pages: usize,
    },
    /// The operator answered no (or input ran out)
    Declined {
        /// Pages fetched and displayed
        pages: usize,
    },
}

impl PaginationOutcome {
    /// Number of pages fetched
    #[must_use]
    pub const fn pages(&self) -> usize {
        match self {
            Self::Done { pages } | Self::Declined { pages } => *pages,
        }
    }
}

/// Generic pagination driver
pub struct Paginator<'a, S: ?Sized, P> {
    source: &'a S,
    prompt: P,
}

impl<'a, S: ?Sized, P: Prompt> Paginator<'a, S, P> {
    /// Create a driver reading pages from `source` and answers from `prompt`
    pub const fn new(source: &'a S, prompt: P) -> Self {
        Self { source, prompt }
    }

    /// Give the prompt back, e.g. to inspect what it printed
    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Fetch `first`, display it, and keep going while the operator agrees.
    ///
    /// Fetch and display errors end the walk immediately. A `next` link to
    /// another host than `first` is an error and is never requested.
    pub async fn run<T, F>(&mut self, first: Url, mut display: F) -> Result<PaginationOutcome>
    where
        S: PageSource<T>,
        F: FnMut(&Page<T>) -> Result<()>,
    {
        let host = first.host_str().map(str::to_owned);
        let mut page = self.source.fetch_page(first).await?;
        let mut pages = 1;
        display(&page)?;

        while let Some(next) = page.next.take() {
            if !self.confirm()? {
                return Ok(PaginationOutcome::Declined { pages });
            }

            let url = Url::parse(&next).map_err(|e| NetboxError::InvalidUrl(format!("{next}: {e}")))?;
            if url.host_str() != host.as_deref() {
                return Err(NetboxError::InvalidUrl(format!(
                    "next page {url} is not on {}",
                    host.as_deref().unwrap_or("the API host")
                )));
            }
            debug!(url = %url, page = pages + 1, "fetching next page");

            page = self.source.fetch_page(url).await?;
            pages += 1;
            display(&page)?;
        }

        Ok(PaginationOutcome::Done { pages })
    }

    fn confirm(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.prompt.ask(QUESTION)? else {
                debug!("no more input, stopping pagination");
                return Ok(false);
            };

            match Answer::parse(&line) {
                Some(Answer::Yes) => return Ok(true),
                Some(Answer::No) => return Ok(false),
                None => debug!(answer = %line.trim(), "unrecognized answer"),
            }
        }
    }
}
