//! Backend descriptor hook.
//!
//! Configuration bootstrapping serializes a configured search backend into a
//! configuration graph. Backends implement [`DescribeBackend`] to emit the
//! facts that identify them: their implementation kind, where their index
//! lives (a path, or an in-memory marker), and the [`IndexSchema`] field names
//! they were built with.

use crate::error::Result;
use crate::schema::IndexSchema;
use graphtext_ir::vocab::{text, xsd};
use graphtext_ir::Term;
use serde::{Deserialize, Serialize};

/// One `(subject, predicate, object)` fact about a backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorFact {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl DescriptorFact {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// Backends that can describe themselves as configuration facts.
pub trait DescribeBackend {
    /// Append the facts describing this backend, all about `subject`.
    fn describe(&self, subject: &Term, out: &mut Vec<DescriptorFact>) -> Result<()>;
}

/// Emit the schema field-name facts about `subject`.
pub fn describe_schema(
    subject: &Term,
    schema: &IndexSchema,
    out: &mut Vec<DescriptorFact>,
) -> Result<()> {
    schema.validate()?;
    let fields = [
        (text::NODE_TYPE_FIELD, &schema.node_type_field),
        (text::NODE_VALUE_FIELD, &schema.node_value_field),
        (text::NODE_META_FIELD, &schema.node_meta_field),
        (text::GRAPH_FIELD, &schema.graph_field),
        (text::DOC_KEY_FIELD, &schema.doc_key_field),
    ];
    for (predicate, name) in fields {
        out.push(DescriptorFact::new(
            subject.clone(),
            Term::uri(predicate),
            Term::plain(name),
        ));
    }
    Ok(())
}

/// Fact marking a file-backed index location.
pub fn index_path_fact(subject: &Term, path: &std::path::Path) -> DescriptorFact {
    DescriptorFact::new(
        subject.clone(),
        Term::uri(text::INDEX_PATH),
        Term::typed(path.display().to_string(), xsd::STRING),
    )
}
