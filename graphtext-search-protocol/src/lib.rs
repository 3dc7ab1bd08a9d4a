//! Full-text search contract for graphtext.
//!
//! This crate defines everything that crosses the boundary between the query
//! engine and a full-text search backend:
//!
//! - **Index schema**: configurable field names for search documents
//! - **Term codec**: graph terms to/from flat document fields
//! - **Provider contract**: the [`SearchProvider`] trait and its lazy,
//!   abandonable [`MatchCursor`]
//! - **Descriptor hook**: [`DescribeBackend`] for configuration bootstrapping
//!
//! The backend itself (tokenization, inverted index, ranking) is external.
//! [`MemorySearchProvider`] is an in-memory reference implementation that
//! serves caller-supplied rankings.
//!
//! # Example
//!
//! ```rust
//! use graphtext_ir::{GraphRef, Term};
//! use graphtext_search_protocol::{IndexSchema, MemorySearchProvider, SearchProvider};
//!
//! let provider = MemorySearchProvider::new(IndexSchema::default()).unwrap();
//! let doc = Term::uri("http://example.org/moby-dick");
//! provider.index(&doc, &GraphRef::Default);
//! provider.set_ranking("whale", vec![(doc.clone(), GraphRef::Default, 0.8)]);
//!
//! let hits: Vec<_> = provider
//!     .match_with_limit(&[GraphRef::Default], "whale", 10)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(hits[0].node, doc);
//! ```

pub mod codec;
mod describe;
mod error;
mod memory;
mod provider;
mod result;
mod schema;

pub use codec::{
    decode, document_key, encode, encode_fields, EncodedTerm, IndexField, IndexedDocument,
    IndexingMode, NodeKind,
};
pub use describe::{describe_schema, index_path_fact, DescribeBackend, DescriptorFact};
pub use error::{Result, SearchError};
pub use memory::{MemorySearchProvider, RecordedRequest, StoredDocument};
pub use provider::{MatchCursor, MatchRequest, SearchProvider};
pub use result::SearchResult;
pub use schema::{
    IndexSchema, DEFAULT_DOC_KEY_FIELD, DEFAULT_GRAPH_FIELD, DEFAULT_NODE_META_FIELD,
    DEFAULT_NODE_TYPE_FIELD, DEFAULT_NODE_VALUE_FIELD,
};
