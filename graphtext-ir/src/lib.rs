//! RDF term model for the graphtext search layer
//!
//! This crate provides the canonical value types exchanged between the query
//! engine, the term codec and search backends:
//!
//! - [`Term`]: a closed variant over blank nodes, IRIs and literals
//! - [`Literal`]: lexical form plus a single [`LiteralAnnotation`]
//! - [`GraphRef`]: the graph a search hit was indexed under
//! - [`NumericValue`]: numeric interpretation of typed literals
//!
//! # Key Design Principles
//!
//! 1. **Closed terms** - every consumer matches exhaustively on [`Term`]; there
//!    is no "other" node kind to downcast to.
//!
//! 2. **Exclusive annotations** - a literal carries either a language tag, a
//!    datatype IRI, or nothing. The exclusivity is structural: both live in
//!    one [`LiteralAnnotation`] field.
//!
//! 3. **Expanded IRIs only** - IRIs are stored in absolute form.
//!
//! # Example
//!
//! ```
//! use graphtext_ir::{LiteralAnnotation, Term};
//!
//! let title = Term::lang("Moby Dick", "en");
//! let lit = title.as_literal().unwrap();
//! assert_eq!(lit.value(), "Moby Dick");
//! assert_eq!(lit.annotation(), &LiteralAnnotation::Language("en".into()));
//! ```

mod numeric;
mod term;
pub mod vocab;

pub use numeric::{NumericKind, NumericValue};
pub use term::{BlankId, GraphRef, Literal, LiteralAnnotation, Term};
