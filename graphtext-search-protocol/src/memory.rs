//! In-memory reference search provider.
//!
//! [`MemorySearchProvider`] stores documents produced by the codec and answers
//! searches from caller-supplied rankings: for each query text, an ordered list
//! of `(document, score)` pairs. It does no tokenization and no scoring of its
//! own. Useful for embedding, tests, and as a model of the provider contract:
//!
//! - documents are decoded lazily, one per pull from the cursor
//! - graph scope, threshold and limit are pushed down into the cursor
//! - every search and every open cursor is counted

use crate::codec::{self, IndexField, IndexedDocument, IndexingMode};
use crate::describe::{describe_schema, DescribeBackend, DescriptorFact};
use crate::error::Result;
use crate::provider::{MatchCursor, MatchRequest, SearchProvider};
use crate::schema::IndexSchema;
use graphtext_ir::vocab::{text, xsd};
use graphtext_ir::{GraphRef, Term};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Document held by the in-memory provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    fields: Vec<IndexField>,
}

impl StoredDocument {
    pub fn new(fields: Vec<IndexField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[IndexField] {
        &self.fields
    }
}

impl IndexedDocument for StoredDocument {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.as_slice().field(name)
    }
}

/// Copy of a request as received by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub graphs: Vec<GraphRef>,
    pub text: String,
    pub threshold: Option<f64>,
    pub limit: Option<u64>,
}

impl From<&MatchRequest<'_>> for RecordedRequest {
    fn from(req: &MatchRequest<'_>) -> Self {
        Self {
            graphs: req.graphs.to_vec(),
            text: req.text.to_string(),
            threshold: req.threshold,
            limit: req.limit,
        }
    }
}

/// In-memory search provider
#[derive(Debug, Default)]
pub struct MemorySearchProvider {
    schema: IndexSchema,
    /// Stored documents by document key
    documents: RwLock<FxHashMap<String, StoredDocument>>,
    /// Ranked document keys per query text, descending score
    rankings: RwLock<FxHashMap<String, Vec<(String, f64)>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    pulled: AtomicUsize,
    open_cursors: AtomicUsize,
}

impl MemorySearchProvider {
    pub fn new(schema: IndexSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self {
            schema,
            ..Default::default()
        })
    }

    pub fn schema(&self) -> &IndexSchema {
        &self.schema
    }

    /// Store `term` as indexed under `graph`; returns its document key.
    pub fn index(&self, term: &Term, graph: &GraphRef) -> String {
        let fields = codec::encode_fields(term, graph, &self.schema);
        let key = codec::document_key(term, graph);
        self.documents
            .write()
            .insert(key.clone(), StoredDocument::new(fields));
        key
    }

    /// Index the node `mode` selects from `(s, p, o)`.
    ///
    /// Returns the document key, or `None` when the triple carries no text.
    pub fn index_triple(
        &self,
        mode: IndexingMode,
        graph: &GraphRef,
        s: &Term,
        p: &Term,
        o: &Term,
    ) -> Option<String> {
        mode.target(s, p, o).map(|node| self.index(node, graph))
    }

    /// Remove a stored document. Returns whether it was present.
    pub fn unindex(&self, term: &Term, graph: &GraphRef) -> bool {
        let key = codec::document_key(term, graph);
        self.documents.write().remove(&key).is_some()
    }

    /// Insert a raw document under an explicit key.
    ///
    /// Lets callers store documents the codec would never produce, such as
    /// ones written by another schema version.
    pub fn insert_document(&self, key: impl Into<String>, document: StoredDocument) {
        self.documents.write().insert(key.into(), document);
    }

    /// Set the ranking returned for `text`.
    ///
    /// Entries are `(node, graph, score)` and are sorted by descending score;
    /// ties keep their given order.
    pub fn set_ranking(&self, text: impl Into<String>, ranked: Vec<(Term, GraphRef, f64)>) {
        let mut keys: Vec<(String, f64)> = ranked
            .into_iter()
            .map(|(node, graph, score)| (codec::document_key(&node, &graph), score))
            .collect();
        keys.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.rankings.write().insert(text.into(), keys);
    }

    /// Set a ranking by raw document key.
    pub fn set_ranking_keys(&self, text: impl Into<String>, mut ranked: Vec<(String, f64)>) {
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.rankings.write().insert(text.into(), ranked);
    }

    pub fn document_count(&self) -> usize {
        self.documents.read().len()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn search_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Number of ranking entries pulled from cursors so far.
    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    /// Cursors handed out and not yet released.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }
}

impl SearchProvider for MemorySearchProvider {
    fn search<'a>(&'a self, request: &MatchRequest<'_>) -> Result<MatchCursor<'a>> {
        self.requests.lock().push(RecordedRequest::from(request));

        let ranking = self
            .rankings
            .read()
            .get(request.text)
            .cloned()
            .unwrap_or_default();
        tracing::trace!(
            text = request.text,
            candidates = ranking.len(),
            "memory search"
        );

        let graphs = request.graphs.to_vec();
        let iter = ranking.into_iter().filter_map(move |(key, score)| {
            self.pulled.fetch_add(1, Ordering::SeqCst);
            let documents = self.documents.read();
            // Documents removed after the ranking was set are skipped.
            let doc = documents.get(&key)?;
            match codec::decode(doc, score, &self.schema) {
                Ok(result) if graphs.is_empty() || graphs.contains(&result.graph) => {
                    Some(Ok(result))
                }
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            }
        });

        self.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(MatchCursor::new(iter)
            .bounded(request.threshold, request.limit)
            .on_release(move || {
                self.open_cursors.fetch_sub(1, Ordering::SeqCst);
            }))
    }
}

impl DescribeBackend for MemorySearchProvider {
    fn describe(&self, subject: &Term, out: &mut Vec<DescriptorFact>) -> Result<()> {
        out.push(DescriptorFact::new(
            subject.clone(),
            Term::uri(text::BACKEND_KIND),
            Term::uri(format!("{}MemorySearchProvider", text::NS)),
        ));
        out.push(DescriptorFact::new(
            subject.clone(),
            Term::uri(text::IN_MEMORY),
            Term::typed("true", xsd::BOOLEAN),
        ));
        describe_schema(subject, &self.schema, out)
    }
}
