//! Full-text match property function (`pf:textMatch`)
//!
//! Turns a free-text search against the context's [`SearchProvider`] into
//! solution rows binding a match variable (and optionally a score variable).
//!
//! # Argument shapes
//!
//! | subjects | objects | meaning |
//! |----------|---------|---------|
//! | `?m` | `"text"` | match only |
//! | `(?m ?score)` | `"text"` | match + score |
//! | ... | `("text" 5)` | integer constant: limit |
//! | ... | `("text" 0.5)` | decimal/float/double constant: threshold |
//! | ... | `("text" 0.5 5)` | threshold, then limit |
//!
//! # Components
//!
//! - [`compile`]: argument validation producing an immutable [`TextMatchSpec`]
//! - [`TextMatchOperator`]: evaluation against an input [`Multiset`]
//!
//! [`SearchProvider`]: graphtext_search_protocol::SearchProvider
//! [`Multiset`]: crate::binding::Multiset

mod compile;
mod operator;

pub use compile::compile;
pub use operator::TextMatchOperator;

use crate::pattern::PatternItem;
use graphtext_ir::Term;
use std::sync::Arc;

/// Compiled arguments of one `pf:textMatch` call.
///
/// Built only by [`compile`] and never mutated afterwards, so a single spec
/// can be evaluated against independent inputs at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatchSpec {
    pub(crate) match_item: PatternItem,
    /// Always a variable when present
    pub(crate) score_item: Option<PatternItem>,
    /// Always a literal
    pub(crate) search_text: Term,
    /// Configured limit, sign preserved; negative values never cap results
    pub(crate) limit: Option<i64>,
    pub(crate) threshold: Option<f64>,
}

impl TextMatchSpec {
    /// Item the matched node is bound to (or compared against, when fixed)
    pub fn match_item(&self) -> &PatternItem {
        &self.match_item
    }

    pub fn score_item(&self) -> Option<&PatternItem> {
        self.score_item.as_ref()
    }

    pub fn score_var(&self) -> Option<&Arc<str>> {
        self.score_item.as_ref().and_then(PatternItem::var_name)
    }

    /// The search literal
    pub fn search_text(&self) -> &Term {
        &self.search_text
    }

    /// Lexical form of the search literal, as sent to the provider
    pub fn query_text(&self) -> &str {
        self.search_text
            .as_literal()
            .map(|lit| lit.value())
            .unwrap_or_default()
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }
}
