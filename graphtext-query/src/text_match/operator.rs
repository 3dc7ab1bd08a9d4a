//! `pf:textMatch` evaluation
//!
//! One evaluation runs one provider search and turns the accepted results
//! into fresh solution rows. Output rows carry only the match and score
//! bindings; input bindings are used to filter matches and are not
//! projected forward.

use super::TextMatchSpec;
use crate::binding::{Multiset, SolutionRow};
use crate::context::{ExecutionContext, SEARCH_PROVIDER_KEY};
use crate::error::{QueryError, Result};
use crate::function::PropertyFunction;
use crate::pattern::PatternItem;
use graphtext_ir::Term;
use graphtext_search_protocol::MatchRequest;
use rustc_hash::FxHashSet;

/// Operator evaluating one compiled `pf:textMatch` call
#[derive(Debug, Clone)]
pub struct TextMatchOperator {
    spec: TextMatchSpec,
}

/// Which result nodes the evaluation keeps
#[derive(Debug)]
enum MatchFilter<'s> {
    /// Match item is a constant
    Fixed(&'s Term),
    /// Match variable is bound in the input; keep its bound values
    Bound(FxHashSet<Term>),
    Any,
}

impl MatchFilter<'_> {
    fn accepts(&self, node: &Term) -> bool {
        match self {
            MatchFilter::Fixed(term) => *term == node,
            MatchFilter::Bound(values) => values.contains(node),
            MatchFilter::Any => true,
        }
    }
}

/// Where the configured limit is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LimitPlacement {
    None,
    /// Sent to the provider with the request
    Pushed(u64),
    /// Enforced while consuming the cursor
    Client(u64),
}

impl TextMatchOperator {
    pub fn new(spec: TextMatchSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &TextMatchSpec {
        &self.spec
    }

    fn limit_placement(&self, input: &Multiset) -> LimitPlacement {
        let Some(limit) = self.spec.limit else {
            return LimitPlacement::None;
        };
        let Ok(limit) = u64::try_from(limit) else {
            tracing::warn!(limit, "negative textMatch limit ignored");
            return LimitPlacement::None;
        };
        match self.spec.match_item.var_name() {
            Some(var) if !input.contains_variable(var) => LimitPlacement::Pushed(limit),
            _ => LimitPlacement::Client(limit),
        }
    }

    fn match_filter(&self, input: &Multiset) -> MatchFilter<'_> {
        match &self.spec.match_item {
            PatternItem::Const(term) => MatchFilter::Fixed(term),
            PatternItem::Var(var) if input.contains_variable(var) => {
                MatchFilter::Bound(input.bound_values(var))
            }
            PatternItem::Var(_) => MatchFilter::Any,
        }
    }
}

impl PropertyFunction for TextMatchOperator {
    fn evaluate(&self, input: Multiset, ctx: &ExecutionContext) -> Result<Multiset> {
        if input.is_null() || input.is_empty() {
            tracing::debug!(null = input.is_null(), "textMatch input has no solutions");
            return Ok(input);
        }

        let provider = ctx
            .search_provider(SEARCH_PROVIDER_KEY)
            .ok_or_else(|| QueryError::ProviderUnavailable(SEARCH_PROVIDER_KEY.to_string()))?;

        let span = tracing::debug_span!(
            "text_match",
            text = self.spec.query_text(),
            input_rows = input.len(),
            pushed_limit = tracing::field::Empty,
            accepted = tracing::field::Empty
        );
        let _guard = span.enter();

        let placement = self.limit_placement(&input);
        let filter = self.match_filter(&input);
        tracing::debug!(?placement, ?filter, "textMatch plan");

        if let Some(score_var) = self.spec.score_var() {
            if input.contains_variable(score_var) {
                return Err(QueryError::ScoreVariableConflict(score_var.to_string()));
            }
        }

        let mut request = MatchRequest::new(&ctx.active_graphs, self.spec.query_text());
        if let Some(threshold) = self.spec.threshold {
            request = request.with_threshold(threshold);
        }
        let client_limit = match placement {
            LimitPlacement::Pushed(limit) => {
                span.record("pushed_limit", limit);
                request = request.with_limit(limit);
                None
            }
            LimitPlacement::Client(limit) => Some(limit),
            LimitPlacement::None => None,
        };

        let match_var = self.spec.match_item.var_name();
        let score_var = self.spec.score_var();
        let mut cursor = provider.search(&request)?;
        let mut output = Multiset::new();
        let mut accepted: u64 = 0;

        while client_limit.map_or(true, |cap| accepted < cap) {
            let Some(item) = cursor.next() else {
                break;
            };
            let result = item?;
            if !filter.accepts(&result.node) {
                continue;
            }
            tracing::trace!(node = %result.node, score = result.score, "textMatch hit");
            let mut row = SolutionRow::new();
            if let Some(var) = match_var {
                row.bind(var, result.node);
            }
            if let Some(var) = score_var {
                row.bind(var, Term::double(result.score));
            }
            output.push(row);
            accepted += 1;
        }
        drop(cursor);

        span.record("accepted", accepted);
        Ok(output)
    }
}
