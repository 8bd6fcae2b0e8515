//! Vocabulary constants for OWL/XML ontology documents.
//!
//! This crate is the single home for the IRIs and element/attribute names
//! the parser and metrics engine match against.
//!
//! # Organization
//!
//! - `owl2` - OWL 2 namespace and the OWL/XML construct element names
//! - `rdfs` - RDFS annotation-property IRIs (label, comment)
//! - `attrs` - attribute names carrying entity IRIs

/// OWL 2 vocabulary constants
pub mod owl2 {
    /// The OWL 2 namespace, used as the default namespace of OWL/XML documents
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    /// Declaration axiom element
    pub const DECLARATION: &str = "Declaration";

    /// Class entity element
    pub const CLASS: &str = "Class";

    /// Object property entity element
    pub const OBJECT_PROPERTY: &str = "ObjectProperty";

    /// Data property entity element
    pub const DATA_PROPERTY: &str = "DataProperty";

    /// Annotation property entity element
    pub const ANNOTATION_PROPERTY: &str = "AnnotationProperty";

    /// Subclass axiom element
    pub const SUB_CLASS_OF: &str = "SubClassOf";

    /// Annotation assertion axiom element
    pub const ANNOTATION_ASSERTION: &str = "AnnotationAssertion";

    /// Literal value element (annotation values)
    pub const LITERAL: &str = "Literal";

    /// Full-IRI reference element (annotation subjects)
    pub const IRI: &str = "IRI";

    /// Abbreviated-IRI reference element (annotation subjects)
    pub const ABBREVIATED_IRI: &str = "AbbreviatedIRI";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// The RDFS namespace
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:label in abbreviated (prefixed) form, as OWL/XML documents
    /// usually write it
    pub const LABEL_ABBREVIATED: &str = "rdfs:label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:comment in abbreviated (prefixed) form
    pub const COMMENT_ABBREVIATED: &str = "rdfs:comment";
}

/// Attribute names carrying entity IRIs on OWL/XML entity elements
pub mod attrs {
    /// Full-IRI attribute, checked first
    pub const IRI: &str = "IRI";

    /// Abbreviated-IRI attribute, the fallback
    pub const ABBREVIATED_IRI: &str = "abbreviatedIRI";
}

/// Check whether an annotation-property IRI names `rdfs:label`, in either
/// abbreviated or expanded form.
pub fn is_label_iri(iri: &str) -> bool {
    iri == rdfs::LABEL_ABBREVIATED || iri == rdfs::LABEL
}

/// Check whether an annotation-property IRI names `rdfs:comment`, in either
/// abbreviated or expanded form.
pub fn is_comment_iri(iri: &str) -> bool {
    iri == rdfs::COMMENT_ABBREVIATED || iri == rdfs::COMMENT
}
