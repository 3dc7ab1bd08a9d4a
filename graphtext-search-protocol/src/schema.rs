//! Index schema: the field names a search document uses for each part of a
//! graph term.
//!
//! The field names are a shared contract between the codec, search backends
//! and the configuration layer that describes backends. Nothing in the codec
//! hardcodes them.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Default name of the node-type field.
pub const DEFAULT_NODE_TYPE_FIELD: &str = "nodeType";
/// Default name of the node-value field.
pub const DEFAULT_NODE_VALUE_FIELD: &str = "nodeValue";
/// Default name of the node-meta field.
pub const DEFAULT_NODE_META_FIELD: &str = "nodeMeta";
/// Default name of the graph field.
pub const DEFAULT_GRAPH_FIELD: &str = "graph";
/// Default name of the document-key field.
pub const DEFAULT_DOC_KEY_FIELD: &str = "docKey";

/// Field-name mapping between terms and index documents.
///
/// Deserializes from camelCase JSON; every field is optional and falls back
/// to its default:
///
/// ```json
/// { "nodeTypeField": "kind", "graphField": "g" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexSchema {
    /// Field holding the node kind (`Blank`, `Uri`, `Literal`)
    pub node_type_field: String,
    /// Field holding the blank label, IRI, or literal lexical form
    pub node_value_field: String,
    /// Field holding `@tag` or a datatype IRI for literals
    pub node_meta_field: String,
    /// Field holding the graph name (absent for the default graph)
    pub graph_field: String,
    /// Field holding the stable document key used for removal
    pub doc_key_field: String,
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self {
            node_type_field: DEFAULT_NODE_TYPE_FIELD.to_string(),
            node_value_field: DEFAULT_NODE_VALUE_FIELD.to_string(),
            node_meta_field: DEFAULT_NODE_META_FIELD.to_string(),
            graph_field: DEFAULT_GRAPH_FIELD.to_string(),
            doc_key_field: DEFAULT_DOC_KEY_FIELD.to_string(),
        }
    }
}

impl IndexSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: IndexSchema =
            serde_json::from_str(json).map_err(|e| SearchError::Schema(e.to_string()))?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn with_node_type_field(mut self, name: impl Into<String>) -> Self {
        self.node_type_field = name.into();
        self
    }

    pub fn with_node_value_field(mut self, name: impl Into<String>) -> Self {
        self.node_value_field = name.into();
        self
    }

    pub fn with_node_meta_field(mut self, name: impl Into<String>) -> Self {
        self.node_meta_field = name.into();
        self
    }

    pub fn with_graph_field(mut self, name: impl Into<String>) -> Self {
        self.graph_field = name.into();
        self
    }

    pub fn with_doc_key_field(mut self, name: impl Into<String>) -> Self {
        self.doc_key_field = name.into();
        self
    }

    /// All field names in declaration order.
    pub fn field_names(&self) -> [&str; 5] {
        [
            &self.node_type_field,
            &self.node_value_field,
            &self.node_meta_field,
            &self.graph_field,
            &self.doc_key_field,
        ]
    }

    /// Validate the schema.
    ///
    /// # Validation Rules
    ///
    /// - every field name must be non-blank
    /// - field names must be pairwise distinct
    pub fn validate(&self) -> Result<()> {
        let names = self.field_names();
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SearchError::Schema(format!(
                    "field name at position {} is empty",
                    i
                )));
            }
            if names[..i].contains(name) {
                return Err(SearchError::Schema(format!(
                    "field name '{}' is used more than once",
                    name
                )));
            }
        }
        Ok(())
    }
}
