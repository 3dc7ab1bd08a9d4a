//! Pattern items: the arguments of a property-function call

use crate::binding::SolutionRow;
use graphtext_ir::Term;
use std::fmt;
use std::sync::Arc;

/// One argument position of a pattern
///
/// Variable names are stored without the leading `?`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternItem {
    /// Variable placeholder
    Var(Arc<str>),
    /// Fixed term
    Const(Term),
}

impl PatternItem {
    /// Create a variable item; a leading `?` or `$` is stripped.
    pub fn var(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        let name = name
            .strip_prefix('?')
            .or_else(|| name.strip_prefix('$'))
            .unwrap_or(name);
        PatternItem::Var(Arc::from(name))
    }

    pub fn constant(term: Term) -> Self {
        PatternItem::Const(term)
    }

    /// Whether this item is a fixed term
    pub fn is_fixed(&self) -> bool {
        matches!(self, PatternItem::Const(_))
    }

    pub fn var_name(&self) -> Option<&Arc<str>> {
        match self {
            PatternItem::Var(name) => Some(name),
            PatternItem::Const(_) => None,
        }
    }

    pub fn as_const(&self) -> Option<&Term> {
        match self {
            PatternItem::Const(term) => Some(term),
            PatternItem::Var(_) => None,
        }
    }

    /// Value of this item against `row`: the fixed term, or the variable's
    /// binding in the row if any.
    pub fn bind<'r>(&'r self, row: &'r SolutionRow) -> Option<&'r Term> {
        match self {
            PatternItem::Const(term) => Some(term),
            PatternItem::Var(name) => row.get(name),
        }
    }
}

impl fmt::Display for PatternItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternItem::Var(name) => write!(f, "?{name}"),
            PatternItem::Const(term) => write!(f, "{term}"),
        }
    }
}

impl From<Term> for PatternItem {
    fn from(term: Term) -> Self {
        PatternItem::Const(term)
    }
}
