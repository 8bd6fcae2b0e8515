//! Error types for OWL/XML parsing and hierarchy resolution

/// Error type for OWL/XML parsing and hierarchy operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Entity element without an `IRI` or `abbreviatedIRI` attribute
    #[error("IRI not found for element <{element}>")]
    IriNotFound { element: String },

    /// Label/comment assertion without a `Literal` value child
    #[error("Literal not found for {kind} assertion")]
    LiteralNotFound { kind: &'static str },

    /// Label/comment assertion with more than one `Literal` value child
    #[error("multiple Literals for {kind} assertion")]
    MultipleLiterals { kind: &'static str },

    /// Document contained no recognizable class declarations
    #[error("empty ontology: no class declarations found in document")]
    EmptyOntology,

    /// The subclass axioms form a cycle in the parent graph
    #[error("cyclic class hierarchy detected at IRI {0}")]
    CyclicHierarchy(String),

    /// Underlying XML syntax or I/O error from the pull reader
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type for OWL/XML operations
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    /// Create an IRI-not-found error for the named element
    pub fn iri_not_found(element: impl Into<String>) -> Self {
        Self::IriNotFound {
            element: element.into(),
        }
    }
}
