//! Solution rows and multisets
//!
//! - `SolutionRow`: variable name -> term, in binding order
//! - `Multiset`: ordered rows, or the `Null` "no solutions" sentinel
//!
//! Duplicate rows are allowed, and the same variable may be bound to
//! different terms in different rows.

use graphtext_ir::Term;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A single solution: variable bindings in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionRow {
    bindings: IndexMap<Arc<str>, Term>,
}

impl SolutionRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `term`, replacing any previous binding.
    pub fn bind(&mut self, var: impl AsRef<str>, term: Term) {
        self.bindings.insert(Arc::from(var.as_ref()), term);
    }

    pub fn with(mut self, var: impl AsRef<str>, term: Term) -> Self {
        self.bind(var, term);
        self
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|k| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

/// Collection of solutions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Multiset {
    /// Canonical "no solutions" sentinel
    Null,
    /// Ordered rows (possibly none)
    Rows(Vec<SolutionRow>),
}

impl Default for Multiset {
    fn default() -> Self {
        Multiset::Rows(Vec::new())
    }
}

impl Multiset {
    /// Empty multiset (not the null sentinel)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn null() -> Self {
        Multiset::Null
    }

    pub fn from_rows(rows: Vec<SolutionRow>) -> Self {
        Multiset::Rows(rows)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Multiset::Null)
    }

    /// True for the null sentinel and for a multiset with no rows.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn rows(&self) -> &[SolutionRow] {
        match self {
            Multiset::Null => &[],
            Multiset::Rows(rows) => rows,
        }
    }

    /// Append a row. Pushing onto the null sentinel turns it into rows.
    pub fn push(&mut self, row: SolutionRow) {
        match self {
            Multiset::Null => *self = Multiset::Rows(vec![row]),
            Multiset::Rows(rows) => rows.push(row),
        }
    }

    /// Whether `var` is bound in any row.
    pub fn contains_variable(&self, var: &str) -> bool {
        self.rows().iter().any(|row| row.contains(var))
    }

    /// Distinct terms bound to `var` across all rows.
    pub fn bound_values(&self, var: &str) -> FxHashSet<Term> {
        self.rows()
            .iter()
            .filter_map(|row| row.get(var))
            .cloned()
            .collect()
    }

    pub fn into_rows(self) -> Vec<SolutionRow> {
        match self {
            Multiset::Null => Vec::new(),
            Multiset::Rows(rows) => rows,
        }
    }
}

impl FromIterator<SolutionRow> for Multiset {
    fn from_iter<I: IntoIterator<Item = SolutionRow>>(iter: I) -> Self {
        Multiset::Rows(iter.into_iter().collect())
    }
}
