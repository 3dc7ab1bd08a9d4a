//! Search provider contract.
//!
//! A [`SearchProvider`] is implemented by an external full-text backend. The
//! query layer only depends on this trait and on the data it exchanges:
//! a [`MatchRequest`] in, a lazy [`MatchCursor`] of [`SearchResult`]s out.
//!
//! # Semantics
//!
//! - Results are yielded in descending score order.
//! - **`threshold`**: only results with `score >= threshold` are yielded.
//! - **`limit`**: the backend itself returns at most `limit` results. This is
//!   push-down, not client truncation.
//! - The cursor may be abandoned at any point. Backend resources it holds are
//!   released on exhaustion or on drop, whichever comes first.

use crate::error::Result;
use crate::result::SearchResult;
use graphtext_ir::GraphRef;
use std::fmt;

/// Parameters of one search invocation
#[derive(Debug, Clone, Copy)]
pub struct MatchRequest<'r> {
    /// Graphs to search; results indexed under other graphs are excluded.
    /// Empty means all graphs.
    pub graphs: &'r [GraphRef],
    /// Free-text query (lexical form of the search literal)
    pub text: &'r str,
    /// Minimum score, inclusive
    pub threshold: Option<f64>,
    /// Maximum number of results the backend returns
    pub limit: Option<u64>,
}

impl<'r> MatchRequest<'r> {
    pub fn new(graphs: &'r [GraphRef], text: &'r str) -> Self {
        Self {
            graphs,
            text,
            threshold: None,
            limit: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `graph` is within this request's graph scope.
    ///
    /// An empty scope places no restriction on graphs.
    pub fn in_scope(&self, graph: &GraphRef) -> bool {
        self.graphs.is_empty() || self.graphs.contains(graph)
    }
}

/// Backend that answers full-text match requests.
///
/// Only [`search`](SearchProvider::search) is required; the four match
/// shapes (bare, with threshold, with limit, with both) are provided on top
/// of it.
pub trait SearchProvider: fmt::Debug + Send + Sync {
    /// Execute a search and return a lazy cursor over its results.
    ///
    /// Backend failures are returned as `SearchError::Backend`, either from
    /// this call or from the cursor while it is consumed.
    fn search<'a>(&'a self, request: &MatchRequest<'_>) -> Result<MatchCursor<'a>>;

    fn match_text<'a>(&'a self, graphs: &[GraphRef], text: &str) -> Result<MatchCursor<'a>> {
        self.search(&MatchRequest::new(graphs, text))
    }

    fn match_with_threshold<'a>(
        &'a self,
        graphs: &[GraphRef],
        text: &str,
        threshold: f64,
    ) -> Result<MatchCursor<'a>> {
        self.search(&MatchRequest::new(graphs, text).with_threshold(threshold))
    }

    fn match_with_limit<'a>(
        &'a self,
        graphs: &[GraphRef],
        text: &str,
        limit: u64,
    ) -> Result<MatchCursor<'a>> {
        self.search(&MatchRequest::new(graphs, text).with_limit(limit))
    }

    fn match_with_threshold_and_limit<'a>(
        &'a self,
        graphs: &[GraphRef],
        text: &str,
        threshold: f64,
        limit: u64,
    ) -> Result<MatchCursor<'a>> {
        self.search(
            &MatchRequest::new(graphs, text)
                .with_threshold(threshold)
                .with_limit(limit),
        )
    }
}

type ResultIter<'a> = Box<dyn Iterator<Item = Result<SearchResult>> + 'a>;
type ReleaseFn<'a> = Box<dyn FnOnce() + 'a>;

/// Forward-only, lazily evaluated sequence of search results.
///
/// Wraps a backend iterator plus an optional release action. The release
/// action runs exactly once: when the iterator is exhausted, or when the
/// cursor is dropped before that.
pub struct MatchCursor<'a> {
    inner: Option<ResultIter<'a>>,
    release: Option<ReleaseFn<'a>>,
}

impl<'a> MatchCursor<'a> {
    /// Cursor over a backend iterator with nothing to release.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<SearchResult>> + 'a,
    {
        Self {
            inner: Some(Box::new(iter)),
            release: None,
        }
    }

    /// Cursor that yields nothing.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Cursor over already materialized results.
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        Self::new(results.into_iter().map(Ok))
    }

    /// Attach the action that releases the backend handle behind this cursor.
    pub fn on_release<F>(mut self, release: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        self.release = Some(Box::new(release));
        self
    }

    /// Enforce threshold and limit over the wrapped iterator.
    ///
    /// For backends that cannot prune natively. Relies on descending score
    /// order: iteration stops at the first result below the threshold.
    /// Errors are passed through and do not count toward the limit.
    pub fn bounded(mut self, threshold: Option<f64>, limit: Option<u64>) -> Self {
        let Some(inner) = self.inner.take() else {
            return self;
        };
        let bounded = Bounded {
            inner,
            threshold,
            remaining: limit,
            done: false,
        };
        self.inner = Some(Box::new(bounded));
        self
    }

    /// Whether the backend handle has been released.
    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    fn release(&mut self) {
        self.inner = None;
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Threshold/limit adapter behind [`MatchCursor::bounded`]
struct Bounded<'a> {
    inner: ResultIter<'a>,
    threshold: Option<f64>,
    remaining: Option<u64>,
    done: bool,
}

impl Iterator for Bounded<'_> {
    type Item = Result<SearchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        // Checked before pulling so the result after the limit is never computed.
        if self.done || self.remaining == Some(0) {
            return None;
        }
        match self.inner.next()? {
            Ok(result) => {
                if self.threshold.is_some_and(|t| result.score < t) {
                    self.done = true;
                    return None;
                }
                if let Some(n) = self.remaining.as_mut() {
                    *n -= 1;
                }
                Some(Ok(result))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl Iterator for MatchCursor<'_> {
    type Item = Result<SearchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        match inner.next() {
            Some(item) => Some(item),
            None => {
                self.release();
                None
            }
        }
    }
}

impl Drop for MatchCursor<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for MatchCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchCursor")
            .field("released", &self.is_released())
            .finish()
    }
}
