//! Streaming OWL/XML parser for ontoqual.
//!
//! This crate turns an OWL/XML document into an [`OntologyModel`] (classes,
//! properties, labels, comments) in a single forward pass with bounded
//! memory, then resolves the class hierarchy into depths and root/leaf
//! flags with [`resolve_hierarchy`].
//!
//! # Example
//!
//! ```
//! use ontoqual_owl_xml::{parse_str, resolve_hierarchy};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doc = r##"<?xml version="1.0"?>
//! <Ontology xmlns="http://www.w3.org/2002/07/owl#">
//!     <Declaration><Class IRI="#Food"/></Declaration>
//!     <Declaration><Class IRI="#Pizza"/></Declaration>
//!     <SubClassOf><Class IRI="#Pizza"/><Class IRI="#Food"/></SubClassOf>
//! </Ontology>"##;
//!
//! let mut model = parse_str(doc).await.unwrap();
//! let summary = resolve_hierarchy(&mut model).unwrap();
//! assert_eq!(summary.leaf_count, 1);
//! assert_eq!(model.classes["#Pizza"].max_depth, 1);
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod parser;

pub use error::{ParseError, Result};
pub use graph::{resolve_hierarchy, HierarchySummary};
pub use model::{ClassNode, OntologyModel, PropertyNode};
pub use parser::{parse, parse_str};
