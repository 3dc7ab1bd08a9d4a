//! Shared fixtures for graphtext-query integration tests.

#![allow(dead_code)]

pub mod span_capture;

use graphtext_ir::{GraphRef, Term};
use graphtext_query::{
    compile_property_function, CompiledFunction, ExecutionContext, Multiset, PatternItem,
    SolutionRow,
};
use graphtext_search_protocol::{
    MatchCursor, MatchRequest, RecordedRequest, SearchError, SearchProvider, SearchResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEXT_MATCH: &str = graphtext_ir::vocab::pf::TEXT_MATCH;

pub fn doc(n: usize) -> Term {
    Term::uri(format!("http://example.org/doc{n}"))
}

/// Scripted provider that records every request and every pull.
///
/// Serves a fixed result list regardless of the query text. Threshold and
/// limit from the request are honored, as a real backend would. When
/// `fail_at` is set, the pull at that position yields a backend error.
#[derive(Debug, Default)]
pub struct StubProvider {
    results: Vec<(Term, GraphRef, f64)>,
    fail_at: Option<usize>,
    requests: Mutex<Vec<RecordedRequest>>,
    pulled: AtomicUsize,
    released: AtomicUsize,
}

impl StubProvider {
    /// Results for `doc(0)`, `doc(1)`, ... in the default graph with `scores`.
    pub fn with_scores(scores: &[f64]) -> Self {
        let results = scores
            .iter()
            .enumerate()
            .map(|(i, s)| (doc(i), GraphRef::Default, *s))
            .collect();
        Self::with_results(results)
    }

    pub fn with_results(results: Vec<(Term, GraphRef, f64)>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn failing_at(mut self, position: usize) -> Self {
        self.fail_at = Some(position);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn invocations(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("provider was never called")
    }

    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl SearchProvider for StubProvider {
    fn search<'a>(
        &'a self,
        request: &MatchRequest<'_>,
    ) -> graphtext_search_protocol::Result<MatchCursor<'a>> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest::from(request));

        let iter = self
            .results
            .iter()
            .enumerate()
            .map(move |(i, (node, graph, score))| {
                self.pulled.fetch_add(1, Ordering::SeqCst);
                if self.fail_at == Some(i) {
                    return Err(SearchError::backend("index segment unreadable"));
                }
                Ok(SearchResult::new(graph.clone(), node.clone(), *score))
            });
        Ok(MatchCursor::new(iter)
            .bounded(request.threshold, request.limit)
            .on_release(move || {
                self.released.fetch_add(1, Ordering::SeqCst);
            }))
    }
}

pub fn context(provider: &Arc<StubProvider>) -> ExecutionContext {
    ExecutionContext::new().with_search_provider(provider.clone())
}

/// A multiset with one empty row (the identity for joins).
pub fn unit() -> Multiset {
    Multiset::from_rows(vec![SolutionRow::new()])
}

pub fn text(value: &str) -> PatternItem {
    PatternItem::constant(Term::plain(value))
}

pub fn compile(subjects: &[PatternItem], objects: &[PatternItem]) -> CompiledFunction {
    compile_property_function(TEXT_MATCH, subjects, objects).expect("textMatch compiles")
}

/// `?doc ?score` subjects
pub fn doc_and_score() -> Vec<PatternItem> {
    vec![PatternItem::var("doc"), PatternItem::var("score")]
}

pub fn bound_docs(var: &str, values: &[Term]) -> Multiset {
    values
        .iter()
        .map(|v| SolutionRow::new().with(var, v.clone()))
        .collect()
}

pub fn column(out: &Multiset, var: &str) -> Vec<Term> {
    out.rows()
        .iter()
        .filter_map(|row| row.get(var).cloned())
        .collect()
}

pub fn scores(out: &Multiset) -> Vec<f64> {
    out.rows()
        .iter()
        .filter_map(|row| row.get("score").and_then(Term::as_f64))
        .collect()
}
