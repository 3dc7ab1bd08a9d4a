//! RDF term types: IRI, blank node, and literal
//!
//! A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with a label that is stable within its source)
//! - A literal (lexical form + at most one annotation)

use crate::vocab::xsd;
use crate::NumericValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Prefix used for blank node labels in N-Triples style output.
pub const BLANK_PREFIX: &str = "_:";

/// Blank node identifier
///
/// The label never includes the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label (without `_:`)
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", BLANK_PREFIX, self.0)
    }
}

/// Literal annotation
///
/// Language tag and datatype are mutually exclusive, so both live in this one
/// enum rather than two independent optional fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralAnnotation {
    /// Plain literal
    None,
    /// Language-tagged literal (tag stored without the leading `@`)
    Language(Arc<str>),
    /// Typed literal (expanded datatype IRI)
    Datatype(Arc<str>),
}

/// An RDF literal: lexical form plus annotation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    value: Arc<str>,
    annotation: LiteralAnnotation,
}

impl Literal {
    /// Create a literal from its parts
    pub fn new(value: impl AsRef<str>, annotation: LiteralAnnotation) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            annotation,
        }
    }

    /// Lexical form, never including the tag or datatype
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn annotation(&self) -> &LiteralAnnotation {
        &self.annotation
    }

    /// Language tag, if this is a language-tagged literal
    pub fn language(&self) -> Option<&str> {
        match &self.annotation {
            LiteralAnnotation::Language(tag) => Some(tag),
            _ => None,
        }
    }

    /// Datatype IRI, if this is a typed literal
    pub fn datatype(&self) -> Option<&str> {
        match &self.annotation {
            LiteralAnnotation::Datatype(dt) => Some(dt),
            _ => None,
        }
    }

    /// Numeric interpretation of this literal
    ///
    /// Returns `None` for plain and language-tagged literals, for
    /// non-numeric datatypes, and for lexical forms that do not parse under
    /// their datatype.
    pub fn numeric(&self) -> Option<NumericValue> {
        NumericValue::from_literal(self)
    }
}

/// An RDF term
///
/// # Invariants
///
/// - `Term::Uri` always holds an absolute IRI.
/// - Only `Term::Literal` carries an annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Blank node with stable identifier
    Blank(BlankId),
    /// Full expanded IRI
    Uri(Arc<str>),
    /// Literal value
    Literal(Literal),
}

impl Term {
    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::new(label))
    }

    /// Create an IRI term from an expanded IRI string
    pub fn uri(iri: impl AsRef<str>) -> Self {
        Term::Uri(Arc::from(iri.as_ref()))
    }

    /// Create a plain literal (no tag, no datatype)
    pub fn plain(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::new(value, LiteralAnnotation::None))
    }

    /// Create a language-tagged literal
    pub fn lang(value: impl AsRef<str>, tag: impl AsRef<str>) -> Self {
        Term::Literal(Literal::new(
            value,
            LiteralAnnotation::Language(Arc::from(tag.as_ref())),
        ))
    }

    /// Create a typed literal with the given datatype IRI
    pub fn typed(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Term::Literal(Literal::new(
            value,
            LiteralAnnotation::Datatype(Arc::from(datatype.as_ref())),
        ))
    }

    /// Create an xsd:integer literal
    pub fn integer(value: i64) -> Self {
        Term::typed(value.to_string(), xsd::INTEGER)
    }

    /// Create an xsd:double literal
    pub fn double(value: f64) -> Self {
        let lexical = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                "INF".to_string()
            } else {
                "-INF".to_string()
            }
        } else {
            value.to_string()
        };
        Term::typed(lexical, xsd::DOUBLE)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Term::Uri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Try to get as IRI string
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Term::Uri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Numeric value of a numeric literal; `None` for every other term
    pub fn as_f64(&self) -> Option<f64> {
        self.as_literal()
            .and_then(Literal::numeric)
            .map(|n| n.as_f64())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Blank(id) => write!(f, "{id}"),
            Term::Uri(iri) => write!(f, "<{iri}>"),
            Term::Literal(lit) => match lit.annotation() {
                LiteralAnnotation::None => write!(f, "{:?}", lit.value()),
                LiteralAnnotation::Language(tag) => write!(f, "{:?}@{}", lit.value(), tag),
                LiteralAnnotation::Datatype(dt) => write!(f, "{:?}^^<{}>", lit.value(), dt),
            },
        }
    }
}

/// Graph a node was indexed under
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphRef {
    /// The default (unnamed) graph
    Default,
    /// Named graph identified by a blank node
    Blank(BlankId),
    /// Named graph identified by an IRI
    Uri(Arc<str>),
}

impl GraphRef {
    pub fn uri(iri: impl AsRef<str>) -> Self {
        GraphRef::Uri(Arc::from(iri.as_ref()))
    }

    pub fn blank(label: impl AsRef<str>) -> Self {
        GraphRef::Blank(BlankId::new(label))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, GraphRef::Default)
    }

    /// The node naming this graph, or `None` for the default graph
    pub fn as_term(&self) -> Option<Term> {
        match self {
            GraphRef::Default => None,
            GraphRef::Blank(id) => Some(Term::Blank(id.clone())),
            GraphRef::Uri(iri) => Some(Term::Uri(iri.clone())),
        }
    }
}
