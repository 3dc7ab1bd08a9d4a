//! Full-text search property functions for graphtext queries.
//!
//! A property function is a triple pattern whose predicate names a function
//! instead of a stored property. This crate compiles such patterns into
//! immutable [`CompiledFunction`]s and evaluates them over solution
//! [`Multiset`]s against the [`SearchProvider`] found in the
//! [`ExecutionContext`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use graphtext_ir::{vocab::pf, GraphRef, Term};
//! use graphtext_query::{
//!     compile_property_function, ExecutionContext, Multiset, PatternItem, SolutionRow,
//! };
//! use graphtext_search_protocol::{IndexSchema, MemorySearchProvider};
//!
//! let provider = MemorySearchProvider::new(IndexSchema::default()).unwrap();
//! let doc = Term::uri("http://example.org/moby-dick");
//! provider.index(&doc, &GraphRef::Default);
//! provider.set_ranking("whale", vec![(doc.clone(), GraphRef::Default, 0.8)]);
//!
//! let function = compile_property_function(
//!     pf::TEXT_MATCH,
//!     &[PatternItem::var("doc"), PatternItem::var("score")],
//!     &[PatternItem::constant(Term::plain("whale"))],
//! )
//! .unwrap();
//!
//! let ctx = ExecutionContext::new().with_search_provider(Arc::new(provider));
//! let input = Multiset::from_rows(vec![SolutionRow::new()]);
//! let output = function.evaluate(input, &ctx).unwrap();
//! assert_eq!(output.rows()[0].get("doc"), Some(&doc));
//! ```
//!
//! [`SearchProvider`]: graphtext_search_protocol::SearchProvider

pub mod binding;
pub mod context;
pub mod error;
pub mod function;
pub mod pattern;
pub mod text_match;

pub use binding::{Multiset, SolutionRow};
pub use context::{ExecutionContext, SEARCH_PROVIDER_KEY};
pub use error::{QueryError, Result};
pub use function::{
    compile_property_function, is_property_function, CompiledFunction, FunctionKind,
    PropertyFunction,
};
pub use pattern::PatternItem;
pub use text_match::{TextMatchOperator, TextMatchSpec};
