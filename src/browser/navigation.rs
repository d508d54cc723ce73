use std::fmt;
use std::iter::Enumerate;
use std::slice;

use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::page::Page;

/// Which end of the chain a back/forward move ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Start,
    End,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Start => write!(f, "first"),
            Boundary::End => write!(f, "latest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum NavigationError {
    #[error("no browsing history")]
    EmptyHistory,
    #[error("already at the {edge} page")]
    AtBoundary { edge: Boundary },
    #[error("\"{keyword}\" not found in history")]
    NotFound { keyword: String },
    #[error("history is already empty")]
    AlreadyEmpty,
}

/// One row of the full history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry<'a> {
    /// 1-based, oldest page first.
    pub position: usize,
    pub url: &'a str,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub position: usize,
    pub url: &'a str,
}

/// Lazy walk over the whole chain, head to tail.
pub struct Entries<'a> {
    pages: Enumerate<slice::Iter<'a, Page>>,
    current: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = HistoryEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pages.next().map(|(index, page)| HistoryEntry {
            position: index + 1,
            url: page.url(),
            is_current: index == self.current,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pages.size_hint()
    }
}

/// Back/forward history for one user.
///
/// Pages are stored in visit order, so the predecessor of the page at
/// `i` is `i - 1` and its successor `i + 1`. `current_index` is `None`
/// exactly when there are no pages.
#[derive(Debug, Default)]
pub struct Navigation {
    pages: Vec<Page>,
    current_index: Option<usize>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current_index: None,
        }
    }

    /// Opens `url` after the current page, dropping any forward history.
    pub fn visit(&mut self, url: impl Into<String>) -> &Page {
        if let Some(index) = self.current_index {
            let discarded = self.pages.len() - (index + 1);
            if discarded > 0 {
                debug!("dropping {} forward page(s)", discarded);
            }
            self.pages.truncate(index + 1);
        }

        self.pages.push(Page::new(url));
        let index = self.pages.len() - 1;
        self.current_index = Some(index);
        &self.pages[index]
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.map(|i| i > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .map(|i| i + 1 < self.pages.len())
            .unwrap_or(false)
    }

    pub fn go_back(&mut self) -> Result<&Page, NavigationError> {
        let index = self.cursor()?;
        if index == 0 {
            return Err(NavigationError::AtBoundary {
                edge: Boundary::Start,
            });
        }
        self.current_index = Some(index - 1);
        Ok(&self.pages[index - 1])
    }

    pub fn go_forward(&mut self) -> Result<&Page, NavigationError> {
        let index = self.cursor()?;
        if index + 1 >= self.pages.len() {
            return Err(NavigationError::AtBoundary { edge: Boundary::End });
        }
        self.current_index = Some(index + 1);
        Ok(&self.pages[index + 1])
    }

    pub fn current_page(&self) -> Result<&Page, NavigationError> {
        let index = self.cursor()?;
        Ok(&self.pages[index])
    }

    /// Every page from the oldest, regardless of where the cursor is.
    pub fn list_all(&self) -> Result<Entries<'_>, NavigationError> {
        let current = self.cursor()?;
        Ok(Entries {
            pages: self.pages.iter().enumerate(),
            current,
        })
    }

    pub fn search(&self, keyword: &str) -> Result<Vec<SearchHit<'_>>, NavigationError> {
        self.cursor()?;
        let hits: Vec<_> = self
            .pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.matches(keyword))
            .map(|(index, page)| SearchHit {
                position: index + 1,
                url: page.url(),
            })
            .collect();

        if hits.is_empty() {
            return Err(NavigationError::NotFound {
                keyword: keyword.to_string(),
            });
        }
        Ok(hits)
    }

    /// Drops every page. Returns how many were released.
    pub fn clear(&mut self) -> Result<usize, NavigationError> {
        if self.current_index.is_none() {
            return Err(NavigationError::AlreadyEmpty);
        }
        let released = self.pages.len();
        self.pages.clear();
        self.current_index = None;
        debug!("released {} page(s)", released);
        Ok(released)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn cursor(&self) -> Result<usize, NavigationError> {
        self.current_index.ok_or(NavigationError::EmptyHistory)
    }
}
