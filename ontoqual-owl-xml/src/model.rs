//! The ontology model extracted by the streaming parser.
//!
//! # Design Decisions
//!
//! - **Set-typed edges**: `parents`/`children` use `BTreeSet<String>` so a
//!   repeated subclass axiom cannot double an edge, and iteration order is
//!   deterministic for dumps and tests.
//! - **Separate category maps**: classes and the three property kinds each
//!   get their own IRI-keyed map; an IRI is unique within its own map.
//! - **Priority lookup**: annotation targets resolve against classes first,
//!   then data properties, object properties, and annotation properties.

use std::collections::{BTreeSet, HashMap};

/// A named class in the ontology hierarchy.
///
/// `max_depth` and `is_root` are filled in by the depth pass
/// ([`resolve_hierarchy`](crate::graph::resolve_hierarchy)); they are 0 and
/// `false` straight out of the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// The class IRI, unique within the class map
    pub iri: String,
    /// Human-readable label, if an `rdfs:label` assertion targeted this IRI
    pub label: Option<String>,
    /// IRIs of direct superclasses
    pub parents: BTreeSet<String>,
    /// IRIs of direct subclasses
    pub children: BTreeSet<String>,
    /// Length of the longest path to a root, where roots sit at depth 0
    pub max_depth: u32,
    /// True iff this class has no parents
    pub is_root: bool,
}

impl ClassNode {
    /// Create a class node with no label, edges, or computed depth.
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            label: None,
            parents: BTreeSet::new(),
            children: BTreeSet::new(),
            max_depth: 0,
            is_root: false,
        }
    }

    /// The display form: the label when present, the IRI otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.iri)
    }

    /// A leaf class has no subclasses.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An object, data, or annotation property. Properties carry no hierarchy
/// edges; which map a node lives in determines its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    /// The property IRI, unique within its category map
    pub iri: String,
    /// Human-readable label, if an `rdfs:label` assertion targeted this IRI
    pub label: Option<String>,
}

impl PropertyNode {
    /// Create an unlabeled property node.
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            label: None,
        }
    }

    /// The display form: the label when present, the IRI otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.iri)
    }
}

/// Everything the streaming pass extracts from one document.
#[derive(Debug, Default)]
pub struct OntologyModel {
    /// IRI → class node, including stubs synthesized from subclass axioms
    pub classes: HashMap<String, ClassNode>,
    /// IRI → object property
    pub object_properties: HashMap<String, PropertyNode>,
    /// IRI → data property
    pub data_properties: HashMap<String, PropertyNode>,
    /// IRI → annotation property (declared or seen in an assertion)
    pub annotation_properties: HashMap<String, PropertyNode>,
    /// Free-text `rdfs:comment` values, one entry per assertion
    pub comments: Vec<String>,
}

impl OntologyModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of object plus data properties (the "attribute" count).
    pub fn attribute_count(&self) -> usize {
        self.object_properties.len() + self.data_properties.len()
    }

    /// Apply a label to the node the IRI resolves to, probing the category
    /// maps in priority order: classes, data properties, object properties,
    /// annotation properties. Returns false when no map knows the IRI.
    pub fn apply_label(&mut self, iri: &str, label: &str) -> bool {
        if let Some(node) = self.classes.get_mut(iri) {
            node.label = Some(label.to_owned());
            return true;
        }
        if let Some(node) = self.data_properties.get_mut(iri) {
            node.label = Some(label.to_owned());
            return true;
        }
        if let Some(node) = self.object_properties.get_mut(iri) {
            node.label = Some(label.to_owned());
            return true;
        }
        if let Some(node) = self.annotation_properties.get_mut(iri) {
            node.label = Some(label.to_owned());
            return true;
        }
        false
    }
}
