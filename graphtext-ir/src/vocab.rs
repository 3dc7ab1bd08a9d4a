//! Vocabulary constants used by the term model and the search functions.

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:short IRI
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";

    /// xsd:byte IRI
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";

    /// xsd:unsignedLong IRI
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

    /// xsd:unsignedInt IRI
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";

    /// xsd:unsignedShort IRI
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";

    /// xsd:unsignedByte IRI
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:positiveInteger IRI
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    /// xsd:nonPositiveInteger IRI
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";

    /// xsd:negativeInteger IRI
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// Datatypes derived from xsd:integer.
    pub const INTEGER_FAMILY: &[&str] = &[
        INTEGER,
        LONG,
        INT,
        SHORT,
        BYTE,
        UNSIGNED_LONG,
        UNSIGNED_INT,
        UNSIGNED_SHORT,
        UNSIGNED_BYTE,
        NON_NEGATIVE_INTEGER,
        POSITIVE_INTEGER,
        NON_POSITIVE_INTEGER,
        NEGATIVE_INTEGER,
    ];
}

/// Property-function vocabulary (ARQ property namespace)
pub mod pf {
    /// `pf:textMatch` - full-text search match function.
    pub const TEXT_MATCH: &str = "http://jena.hpl.hp.com/ARQ/property#textMatch";
}

/// Vocabulary used by backend descriptor facts.
pub mod text {
    /// Namespace for full-text configuration terms.
    pub const NS: &str = "http://graphtext.dev/ns/text#";

    /// Predicate naming the backend implementation kind.
    pub const BACKEND_KIND: &str = "http://graphtext.dev/ns/text#backendKind";

    /// Predicate carrying an index directory path.
    pub const INDEX_PATH: &str = "http://graphtext.dev/ns/text#indexPath";

    /// Predicate flagging an in-memory index (`true`/`false` boolean literal).
    pub const IN_MEMORY: &str = "http://graphtext.dev/ns/text#inMemory";

    /// Predicate carrying one of the schema field names.
    pub const NODE_TYPE_FIELD: &str = "http://graphtext.dev/ns/text#nodeTypeField";

    /// Predicate carrying one of the schema field names.
    pub const NODE_VALUE_FIELD: &str = "http://graphtext.dev/ns/text#nodeValueField";

    /// Predicate carrying one of the schema field names.
    pub const NODE_META_FIELD: &str = "http://graphtext.dev/ns/text#nodeMetaField";

    /// Predicate carrying one of the schema field names.
    pub const GRAPH_FIELD: &str = "http://graphtext.dev/ns/text#graphField";

    /// Predicate naming the document-key field.
    pub const DOC_KEY_FIELD: &str = "http://graphtext.dev/ns/text#docKeyField";
}
