//! Property-function registry
//!
//! Property functions are invoked like triple patterns whose predicate is a
//! function IRI:
//!
//! ```text
//! ?doc pf:textMatch "whale"
//! (?doc ?score) pf:textMatch ("whale" 0.5 10)
//! ```
//!
//! The subject list and object list become the function's arguments. The set
//! of functions is closed: [`FunctionKind`] enumerates them, and
//! [`compile_property_function`] selects one by IRI and produces an immutable
//! [`CompiledFunction`].

use crate::binding::Multiset;
use crate::context::ExecutionContext;
use crate::error::{QueryError, Result};
use crate::pattern::PatternItem;
use crate::text_match;
use graphtext_ir::vocab::pf;
use std::fmt;
use std::sync::Arc;

/// Runtime entry point shared by every property function.
///
/// Implementations hold only their immutable compiled arguments, so one
/// instance may evaluate independent inputs concurrently.
pub trait PropertyFunction: fmt::Debug + Send + Sync {
    /// Evaluate the function over `input`, producing its solutions.
    fn evaluate(&self, input: Multiset, ctx: &ExecutionContext) -> Result<Multiset>;
}

/// Registered property functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `pf:textMatch` full-text search
    TextMatch,
}

impl FunctionKind {
    /// Every registered kind.
    pub const ALL: &'static [FunctionKind] = &[FunctionKind::TextMatch];

    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.iri() == iri)
    }

    pub fn iri(&self) -> &'static str {
        match self {
            FunctionKind::TextMatch => pf::TEXT_MATCH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::TextMatch => "textMatch",
        }
    }

    /// Validate and normalize arguments for this kind.
    pub fn compile(
        &self,
        subjects: &[PatternItem],
        objects: &[PatternItem],
    ) -> Result<CompiledFunction> {
        match self {
            FunctionKind::TextMatch => {
                let (spec, variables) = text_match::compile(subjects, objects)?;
                Ok(CompiledFunction {
                    kind: *self,
                    function: Arc::new(text_match::TextMatchOperator::new(spec)),
                    variables,
                })
            }
        }
    }
}

/// Whether `iri` names a registered property function.
pub fn is_property_function(iri: &str) -> bool {
    FunctionKind::from_iri(iri).is_some()
}

/// Compile the property function named by `iri`.
///
/// # Errors
///
/// `UnknownFunction` if `iri` is not registered; otherwise whatever the
/// selected kind's argument validation reports.
pub fn compile_property_function(
    iri: &str,
    subjects: &[PatternItem],
    objects: &[PatternItem],
) -> Result<CompiledFunction> {
    let kind =
        FunctionKind::from_iri(iri).ok_or_else(|| QueryError::UnknownFunction(iri.to_string()))?;
    tracing::debug!(function = kind.name(), "compiling property function");
    kind.compile(subjects, objects)
}

/// A compiled, immutable property-function call
#[derive(Debug, Clone)]
pub struct CompiledFunction {
    kind: FunctionKind,
    function: Arc<dyn PropertyFunction>,
    variables: Vec<Arc<str>>,
}

impl CompiledFunction {
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Variables the call references, deduplicated in first-use order.
    ///
    /// Consumed by the planner for dependency analysis.
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    pub fn function(&self) -> &Arc<dyn PropertyFunction> {
        &self.function
    }

    pub fn evaluate(&self, input: Multiset, ctx: &ExecutionContext) -> Result<Multiset> {
        self.function.evaluate(input, ctx)
    }
}
