//! Argument validation for `pf:textMatch`

use super::TextMatchSpec;
use crate::error::{QueryError, Result};
use crate::pattern::PatternItem;
use graphtext_ir::{Literal, NumericValue, Term};
use indexmap::IndexSet;
use std::sync::Arc;

const FUNCTION: &str = "textMatch";

/// Validate and normalize `pf:textMatch` arguments.
///
/// `subjects` is `[match]` or `[match, score]`; `objects` is `[text]`,
/// `[text, n]` or `[text, threshold, limit]`.
///
/// With a single extra constant its numeric kind picks its role: an integer
/// is a limit, a decimal/float/double is a threshold. With two extra
/// constants the first is always the threshold and the second always the
/// limit, whatever their kinds.
///
/// Returns the [`TextMatchSpec`] plus the variables the call references, deduplicated in
/// first-use order (match, score, search text).
pub fn compile(
    subjects: &[PatternItem],
    objects: &[PatternItem],
) -> Result<(TextMatchSpec, Vec<Arc<str>>)> {
    if !(1..=2).contains(&subjects.len()) {
        return Err(QueryError::InvalidArgumentCount {
            function: FUNCTION,
            side: "subject",
            expected: "1 or 2",
            found: subjects.len(),
        });
    }
    let Some((search_item, extras)) = objects.split_first().filter(|(_, e)| e.len() <= 2) else {
        return Err(QueryError::InvalidArgumentCount {
            function: FUNCTION,
            side: "object",
            expected: "1 to 3",
            found: objects.len(),
        });
    };

    let search_text = match search_item {
        PatternItem::Var(name) => return Err(QueryError::NonConstantSearchTerm(name.to_string())),
        PatternItem::Const(term) if term.is_literal() => term.clone(),
        PatternItem::Const(term) => return Err(QueryError::NonLiteralSearchTerm(term.to_string())),
    };

    let match_item = subjects[0].clone();
    let score_item = match subjects.get(1) {
        None => None,
        Some(PatternItem::Const(term)) => {
            return Err(QueryError::FixedScoreVariable(term.to_string()))
        }
        Some(var) => Some(var.clone()),
    };

    let (threshold, limit) = match extras {
        [] => (None, None),
        [extra] => match numeric_constant(extra, "limit or threshold")? {
            NumericValue::Integer(limit) => (None, Some(limit)),
            other => (Some(threshold_value(other, extra)?), None),
        },
        [threshold, limit, ..] => {
            let t = threshold_value(numeric_constant(threshold, "threshold")?, threshold)?;
            let l = numeric_constant(limit, "limit")?
                .as_i64()
                .ok_or_else(|| non_numeric("limit", limit))?;
            (Some(t), Some(l))
        }
    };

    let mut variables: IndexSet<Arc<str>> = IndexSet::new();
    for item in std::iter::once(&match_item)
        .chain(score_item.as_ref())
        .chain(std::iter::once(search_item))
    {
        if let Some(name) = item.var_name() {
            variables.insert(name.clone());
        }
    }

    let spec = TextMatchSpec {
        match_item,
        score_item,
        search_text,
        limit,
        threshold,
    };
    tracing::trace!(?spec, "compiled textMatch");
    Ok((spec, variables.into_iter().collect()))
}

fn numeric_constant(item: &PatternItem, role: &'static str) -> Result<NumericValue> {
    item.as_const()
        .and_then(Term::as_literal)
        .and_then(Literal::numeric)
        .ok_or_else(|| non_numeric(role, item))
}

fn threshold_value(value: NumericValue, item: &PatternItem) -> Result<f64> {
    let t = value.as_f64();
    if t.is_nan() {
        return Err(non_numeric("threshold", item));
    }
    Ok(t)
}

fn non_numeric(role: &'static str, item: &PatternItem) -> QueryError {
    QueryError::NonNumericConstant {
        role,
        found: item.to_string(),
    }
}
