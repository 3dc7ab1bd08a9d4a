//! Term codec: lossless mapping between graph terms and the flat field set a
//! search backend stores.
//!
//! Encoding produces field values to hand to a backend; decoding reads a
//! backend-held document back into a [`SearchResult`]. Field names always
//! come from an [`IndexSchema`].
//!
//! | Term | node type | node value | node meta |
//! |------|-----------|------------|-----------|
//! | `Blank(id)` | `Blank` | `id` | - |
//! | `Uri(iri)` | `Uri` | `iri` | - |
//! | `Literal(v, None)` | `Literal` | `v` | - |
//! | `Literal(v, Language(t))` | `Literal` | `v` | `@t` |
//! | `Literal(v, Datatype(d))` | `Literal` | `v` | `d` |

use crate::error::{Result, SearchError};
use crate::result::SearchResult;
use crate::schema::IndexSchema;
use graphtext_ir::{GraphRef, LiteralAnnotation, Term};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

/// Prefix marking a language tag in the node-meta field.
pub const LANGUAGE_PREFIX: &str = "@";

/// Prefix marking a blank-node graph name in the graph field.
pub const BLANK_GRAPH_PREFIX: &str = "_:";

/// Node kind as stored in the node-type field
///
/// `GraphLiteral` and `Variable` are recognised values of the field but are
/// never indexed; decoding them fails with `UnsupportedTermKind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Blank,
    Uri,
    Literal,
    GraphLiteral,
    Variable,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Blank => "Blank",
            NodeKind::Uri => "Uri",
            NodeKind::Literal => "Literal",
            NodeKind::GraphLiteral => "GraphLiteral",
            NodeKind::Variable => "Variable",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Blank" => Ok(NodeKind::Blank),
            "Uri" => Ok(NodeKind::Uri),
            "Literal" => Ok(NodeKind::Literal),
            "GraphLiteral" => Ok(NodeKind::GraphLiteral),
            "Variable" => Ok(NodeKind::Variable),
            _ => Err(()),
        }
    }
}

/// Flat representation of one term
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedTerm<'a> {
    pub kind: NodeKind,
    /// Blank label, IRI, or literal lexical form (never tag/datatype)
    pub value: &'a str,
    /// `@tag` or datatype IRI; literals only
    pub meta: Option<Cow<'a, str>>,
}

/// Encode a term into its node type, value and meta.
pub fn encode(term: &Term) -> EncodedTerm<'_> {
    match term {
        Term::Blank(id) => EncodedTerm {
            kind: NodeKind::Blank,
            value: id.as_str(),
            meta: None,
        },
        Term::Uri(iri) => EncodedTerm {
            kind: NodeKind::Uri,
            value: iri,
            meta: None,
        },
        Term::Literal(lit) => {
            let meta = match lit.annotation() {
                LiteralAnnotation::None => None,
                LiteralAnnotation::Language(tag) => {
                    Some(Cow::Owned(format!("{}{}", LANGUAGE_PREFIX, tag)))
                }
                LiteralAnnotation::Datatype(dt) => Some(Cow::Borrowed(dt.as_ref())),
            };
            EncodedTerm {
                kind: NodeKind::Literal,
                value: lit.value(),
                meta,
            }
        }
    }
}

/// Graph field value; `None` for the default graph.
pub fn encode_graph(graph: &GraphRef) -> Option<String> {
    match graph {
        GraphRef::Default => None,
        GraphRef::Blank(id) => Some(format!("{}{}", BLANK_GRAPH_PREFIX, id.as_str())),
        GraphRef::Uri(iri) => Some(iri.to_string()),
    }
}

/// One named field value handed to a backend for storage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    pub name: String,
    pub value: String,
}

impl IndexField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Full field set a backend stores for one indexed node.
///
/// The node-meta field is omitted when the term has no meta, and the graph
/// field is omitted for the default graph.
pub fn encode_fields(term: &Term, graph: &GraphRef, schema: &IndexSchema) -> Vec<IndexField> {
    let encoded = encode(term);
    let mut fields = Vec::with_capacity(5);
    fields.push(IndexField::new(
        &schema.node_type_field,
        encoded.kind.as_str(),
    ));
    fields.push(IndexField::new(&schema.node_value_field, encoded.value));
    if let Some(meta) = &encoded.meta {
        fields.push(IndexField::new(&schema.node_meta_field, meta.as_ref()));
    }
    if let Some(g) = encode_graph(graph) {
        fields.push(IndexField::new(&schema.graph_field, g));
    }
    fields.push(IndexField::new(
        &schema.doc_key_field,
        document_key(term, graph),
    ));
    fields
}

/// Stable key for the document holding `term` in `graph`.
///
/// SHA-256 over the encoded node and graph, hex encoded. Pure function of its
/// inputs, so backends can recompute it to remove a document.
pub fn document_key(term: &Term, graph: &GraphRef) -> String {
    let encoded = encode(term);
    let mut hasher = Sha256::new();
    hasher.update(encoded.kind.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(encoded.value.as_bytes());
    hasher.update([0u8]);
    if let Some(meta) = &encoded.meta {
        hasher.update(meta.as_bytes());
    }
    hasher.update([0u8]);
    if let Some(g) = encode_graph(graph) {
        hasher.update(g.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Read-only field lookup over a backend-held document
pub trait IndexedDocument {
    /// Value of the named field, if stored
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> IndexedDocument for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl IndexedDocument for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl IndexedDocument for [IndexField] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

impl IndexedDocument for Vec<IndexField> {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }
}

/// Reconstruct a search result from a retrieved document.
///
/// # Errors
///
/// - `SchemaFieldMissing` when the node-type or node-value field is absent
/// - `SchemaValueInvalid` when the node-type value is not a known kind
/// - `UnsupportedTermKind` for kinds other than Blank, Uri and Literal
pub fn decode<D>(document: &D, score: f64, schema: &IndexSchema) -> Result<SearchResult>
where
    D: IndexedDocument + ?Sized,
{
    let raw_kind = document
        .field(&schema.node_type_field)
        .ok_or_else(|| SearchError::field_missing(&schema.node_type_field))?;
    let kind: NodeKind = raw_kind
        .parse()
        .map_err(|_| SearchError::SchemaValueInvalid {
            field: schema.node_type_field.clone(),
            value: raw_kind.to_string(),
        })?;

    let graph = match document.field(&schema.graph_field) {
        None => GraphRef::Default,
        Some(g) => match g.strip_prefix(BLANK_GRAPH_PREFIX) {
            Some(label) => GraphRef::blank(label),
            None => GraphRef::uri(g),
        },
    };

    let value = document
        .field(&schema.node_value_field)
        .ok_or_else(|| SearchError::field_missing(&schema.node_value_field))?;

    let node = match kind {
        NodeKind::Blank => Term::blank(value),
        NodeKind::Uri => Term::uri(value),
        NodeKind::Literal => match document.field(&schema.node_meta_field) {
            None => Term::plain(value),
            Some(meta) => match meta.strip_prefix(LANGUAGE_PREFIX) {
                Some(tag) => Term::lang(value, tag),
                None => Term::typed(value, meta),
            },
        },
        NodeKind::GraphLiteral | NodeKind::Variable => {
            return Err(SearchError::UnsupportedTermKind {
                kind: kind.to_string(),
            })
        }
    };

    Ok(SearchResult::new(graph, node, score))
}

/// Which triple position is indexed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexingMode {
    /// Index the subject of each text-bearing triple
    #[default]
    Subjects,
    /// Index the predicate of each text-bearing triple
    Predicates,
    /// Index the literal object itself
    Objects,
}

impl IndexingMode {
    /// Node to index for the triple `(s, p, o)`.
    ///
    /// Only triples whose object is a literal carry searchable text; any
    /// other triple yields `None`.
    pub fn target<'t>(&self, s: &'t Term, p: &'t Term, o: &'t Term) -> Option<&'t Term> {
        if !o.is_literal() {
            return None;
        }
        Some(match self {
            IndexingMode::Subjects => s,
            IndexingMode::Predicates => p,
            IndexingMode::Objects => o,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphtext_ir::vocab::xsd;

    fn roundtrip_terms() -> Vec<Term> {
        vec![
            Term::blank("b1"),
            Term::uri("http://example.org/x"),
            Term::plain("abc"),
            Term::lang("abc", "en"),
            Term::typed("42", xsd::INTEGER),
        ]
    }

    #[test]
    fn test_encode_shapes() {
        let b1 = Term::blank("b1");
        let e = encode(&b1);
        assert_eq!((e.kind, e.value, e.meta), (NodeKind::Blank, "b1", None));

        let t = Term::lang("abc", "en");
        let e = encode(&t);
        assert_eq!(e.kind, NodeKind::Literal);
        assert_eq!(e.value, "abc");
        assert_eq!(e.meta.as_deref(), Some("@en"));

        let t = Term::typed("42", xsd::INTEGER);
        let e = encode(&t);
        assert_eq!(e.value, "42");
        assert_eq!(e.meta.as_deref(), Some(xsd::INTEGER));
    }

    #[test]
    fn test_roundtrip_default_graph() {
        let schema = IndexSchema::default();
        for term in roundtrip_terms() {
            let doc = encode_fields(&term, &GraphRef::Default, &schema);
            let result = decode(&doc, 1.5, &schema).unwrap();
            assert_eq!(result.node, term);
            assert_eq!(result.graph, GraphRef::Default);
            assert_eq!(result.score, 1.5);
        }
    }

    #[test]
    fn test_roundtrip_named_graphs_custom_schema() {
        let schema = IndexSchema::new()
            .with_node_type_field("t")
            .with_node_value_field("v")
            .with_node_meta_field("m")
            .with_graph_field("g");
        for graph in [GraphRef::uri("http://example.org/g"), GraphRef::blank("g1")] {
            for term in roundtrip_terms() {
                let doc = encode_fields(&term, &graph, &schema);
                assert!(doc.field("nodeType").is_none());
                let result = decode(&doc, 0.0, &schema).unwrap();
                assert_eq!(result.node, term);
                assert_eq!(result.graph, graph);
            }
        }
    }

    #[test]
    fn test_meta_never_both_language_and_datatype() {
        for term in roundtrip_terms() {
            if let Some(meta) = encode(&term).meta {
                let is_lang = meta.starts_with(LANGUAGE_PREFIX);
                let lit = term.as_literal().unwrap();
                assert_eq!(is_lang, lit.language().is_some());
                assert_eq!(!is_lang, lit.datatype().is_some());
            }
        }
    }

    #[test]
    fn test_decode_missing_node_type() {
        let schema = IndexSchema::default();
        let doc: HashMap<String, String> =
            [("nodeValue".to_string(), "x".to_string())].into_iter().collect();
        let err = decode(&doc, 0.0, &schema).unwrap_err();
        assert!(matches!(err, SearchError::SchemaFieldMissing { field } if field == "nodeType"));
    }

    #[test]
    fn test_decode_missing_node_value() {
        let schema = IndexSchema::default();
        let doc: BTreeMap<String, String> =
            [("nodeType".to_string(), "Uri".to_string())].into_iter().collect();
        let err = decode(&doc, 0.0, &schema).unwrap_err();
        assert!(matches!(err, SearchError::SchemaFieldMissing { field } if field == "nodeValue"));
    }

    #[test]
    fn test_decode_invalid_node_type() {
        let schema = IndexSchema::default();
        let doc = vec![
            IndexField::new("nodeType", "Triple"),
            IndexField::new("nodeValue", "x"),
        ];
        let err = decode(&doc, 0.0, &schema).unwrap_err();
        assert!(matches!(err, SearchError::SchemaValueInvalid { value, .. } if value == "Triple"));
    }

    #[test]
    fn test_decode_unsupported_kinds() {
        let schema = IndexSchema::default();
        for kind in ["GraphLiteral", "Variable"] {
            let doc = vec![
                IndexField::new("nodeType", kind),
                IndexField::new("nodeValue", "x"),
            ];
            let err = decode(&doc, 0.0, &schema).unwrap_err();
            assert!(matches!(err, SearchError::UnsupportedTermKind { .. }));
        }
    }

    #[test]
    fn test_datatype_meta_is_verbatim() {
        let schema = IndexSchema::default();
        let doc = vec![
            IndexField::new("nodeType", "Literal"),
            IndexField::new("nodeValue", "x"),
            IndexField::new("nodeMeta", "urn:custom:type"),
        ];
        let result = decode(&doc, 0.0, &schema).unwrap();
        assert_eq!(result.node, Term::typed("x", "urn:custom:type"));
    }

    #[test]
    fn test_document_key_is_stable_and_distinguishing() {
        let t = Term::lang("abc", "en");
        let g = GraphRef::uri("http://example.org/g");
        assert_eq!(document_key(&t, &g), document_key(&t, &g));
        assert_eq!(document_key(&t, &g).len(), 64);
        assert_ne!(document_key(&t, &g), document_key(&t, &GraphRef::Default));
        assert_ne!(
            document_key(&t, &g),
            document_key(&Term::typed("abc", "en"), &g)
        );
    }

    #[test]
    fn test_indexing_mode_targets() {
        let s = Term::uri("http://example.org/s");
        let p = Term::uri("http://example.org/p");
        let o = Term::plain("text");
        assert_eq!(IndexingMode::Subjects.target(&s, &p, &o), Some(&s));
        assert_eq!(IndexingMode::Predicates.target(&s, &p, &o), Some(&p));
        assert_eq!(IndexingMode::Objects.target(&s, &p, &o), Some(&o));
        assert_eq!(IndexingMode::Subjects.target(&s, &p, &s), None);
    }
}
