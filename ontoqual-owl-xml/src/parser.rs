//! Streaming OWL/XML parser.
//!
//! Converts a byte-chunk sequence into a populated [`OntologyModel`] in a
//! single forward pass with bounded memory. The pull reader emits flat XML
//! events; elements below the document root are assembled into a small
//! retained subtree covering only the *current* top-level axiom. When a
//! depth-2 element closes it is dispatched and dropped, so the live working
//! set is one axiom, not the document.
//!
//! Forward references are legal in OWL/XML, so subclass edges and
//! label/comment assertions are buffered during the pass and resolved after
//! the stream is exhausted.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tokio::io::AsyncBufRead;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::model::{ClassNode, OntologyModel, PropertyNode};
use ontoqual_vocab::{attrs, is_comment_iri, is_label_iri, owl2};

/// Parse an OWL/XML document from a chunked byte source.
///
/// The source is read incrementally; one shared event buffer is reused and
/// cleared per event, and only the subtree of the top-level axiom currently
/// being read is retained.
pub async fn parse<R: AsyncBufRead + Unpin>(source: R) -> Result<OntologyModel> {
    let mut reader = Reader::from_reader(source);
    let mut parser = OwlXmlParser::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into_async(&mut buf).await? {
            Event::Start(ref e) => parser.on_start(e),
            Event::Empty(ref e) => parser.on_empty(e)?,
            Event::End(_) => parser.on_end()?,
            Event::Text(ref t) => parser.on_text(&t.unescape()?),
            Event::CData(ref t) => {
                let raw = t.clone().into_inner();
                parser.on_text(&String::from_utf8_lossy(&raw));
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
        buf.clear();
    }

    parser.finish()
}

/// Parse an OWL/XML document held in memory. Convenience for tests and
/// small inputs; the streaming path is [`parse`].
pub async fn parse_str(document: &str) -> Result<OntologyModel> {
    parse(document.as_bytes()).await
}

/// Whether a queued annotation carries a label or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnnotationKind {
    Label,
    Comment,
}

impl AnnotationKind {
    fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::Label => "label",
            AnnotationKind::Comment => "comment",
        }
    }
}

/// A label/comment assertion waiting for the document end.
#[derive(Debug)]
struct PendingAnnotation {
    kind: AnnotationKind,
    text: String,
    targets: Vec<String>,
}

/// A partially read element: resolved namespace, local name, the IRI
/// attributes, accumulated text, and child elements. Frames exist only for
/// elements at depth >= 2 and die with their top-level axiom.
#[derive(Debug)]
struct Frame {
    ns: Option<String>,
    local: String,
    iri_attr: Option<String>,
    abbreviated_iri_attr: Option<String>,
    text: String,
    children: Vec<Frame>,
}

impl Frame {
    /// The entity IRI: the `IRI` attribute, falling back to
    /// `abbreviatedIRI`. Absence of both is fatal.
    fn iri(&self) -> Result<&str> {
        self.iri_attr
            .as_deref()
            .or(self.abbreviated_iri_attr.as_deref())
            .ok_or_else(|| ParseError::iri_not_found(&self.local))
    }
}

/// Streaming parser state: namespace tables, the frame stack for the
/// current top-level axiom, and the buffered model under construction.
struct OwlXmlParser {
    /// Declared prefix → URI, last declaration wins
    namespaces: HashMap<String, String>,
    /// Query table: like `namespaces`, but the default (unprefixed)
    /// namespace is also registered under the `owl` alias so construct
    /// matching works however the document declared its namespaces
    query: HashMap<String, String>,
    /// Count of currently open elements; the document root is depth 1
    depth: usize,
    stack: Vec<Frame>,
    model: OntologyModel,
    pending_subclasses: Vec<(String, String)>,
    pending_annotations: Vec<PendingAnnotation>,
}

impl OwlXmlParser {
    fn new() -> Self {
        Self {
            namespaces: HashMap::new(),
            query: HashMap::new(),
            depth: 0,
            stack: Vec::new(),
            model: OntologyModel::new(),
            pending_subclasses: Vec::new(),
            pending_annotations: Vec::new(),
        }
    }

    /// Record `xmlns` / `xmlns:p` declarations from an element's attributes.
    /// The default namespace is aliased as `owl` in the query table.
    fn collect_namespaces(&mut self, e: &BytesStart) {
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = String::from_utf8_lossy(&attr.value).to_string();
            if key == "xmlns" {
                self.namespaces.insert(String::new(), value.clone());
                self.query.insert("owl".to_string(), value);
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                self.namespaces.insert(prefix.to_string(), value.clone());
                self.query.insert(prefix.to_string(), value);
            }
        }
    }

    /// Build a frame for an opening element: resolve its namespace against
    /// the current tables and capture the IRI-bearing attributes.
    fn make_frame(&self, e: &BytesStart) -> Frame {
        let (prefix, local) = split_qname(e.name().as_ref());
        let ns = self.namespaces.get(&prefix).cloned();

        let mut iri_attr = None;
        let mut abbreviated_iri_attr = None;
        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                k if k == attrs::IRI.as_bytes() => {
                    iri_attr = Some(String::from_utf8_lossy(&attr.value).to_string());
                }
                k if k == attrs::ABBREVIATED_IRI.as_bytes() => {
                    abbreviated_iri_attr = Some(String::from_utf8_lossy(&attr.value).to_string());
                }
                _ => {}
            }
        }

        Frame {
            ns,
            local,
            iri_attr,
            abbreviated_iri_attr,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// True when the frame's namespace is the one registered under the
    /// `owl` query alias.
    fn is_owl(&self, frame: &Frame) -> bool {
        match (frame.ns.as_deref(), self.query.get("owl")) {
            (Some(ns), Some(owl_ns)) => ns == owl_ns,
            _ => false,
        }
    }

    fn on_start(&mut self, e: &BytesStart) {
        self.collect_namespaces(e);
        self.depth += 1;
        if self.depth >= 2 {
            let frame = self.make_frame(e);
            self.stack.push(frame);
        }
    }

    /// A self-closing element: a childless frame that opens and closes in
    /// one event, without changing the depth.
    fn on_empty(&mut self, e: &BytesStart) -> Result<()> {
        self.collect_namespaces(e);
        let frame = self.make_frame(e);
        match self.depth + 1 {
            d if d < 2 => {} // an empty document root; nothing to keep
            2 => self.dispatch(frame)?,
            _ => {
                if let Some(parent) = self.stack.last_mut() {
                    parent.children.push(frame);
                }
            }
        }
        Ok(())
    }

    fn on_text(&mut self, text: &str) {
        if let Some(frame) = self.stack.last_mut() {
            frame.text.push_str(text);
        }
    }

    fn on_end(&mut self) -> Result<()> {
        if let Some(frame) = self.stack.pop() {
            if self.depth == 2 {
                // A fully processed direct child of the document root:
                // dispatch it, then let it drop. Nothing else of the
                // document is retained.
                self.dispatch(frame)?;
            } else if let Some(parent) = self.stack.last_mut() {
                parent.children.push(frame);
            }
        }
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    /// Dispatch a completed top-level axiom by its qualified tag.
    fn dispatch(&mut self, elem: Frame) -> Result<()> {
        if !self.is_owl(&elem) {
            return Ok(());
        }
        match elem.local.as_str() {
            owl2::DECLARATION => self.on_declaration(&elem),
            owl2::SUB_CLASS_OF => self.on_subclass_of(&elem),
            owl2::ANNOTATION_ASSERTION => self.on_annotation_assertion(&elem),
            _ => Ok(()),
        }
    }

    fn on_declaration(&mut self, elem: &Frame) -> Result<()> {
        let entities: Vec<&Frame> = elem.children.iter().filter(|c| self.is_owl(c)).collect();
        for child in entities {
            match child.local.as_str() {
                owl2::CLASS => {
                    let iri = child.iri()?.to_string();
                    self.model
                        .classes
                        .entry(iri.clone())
                        .or_insert_with(|| ClassNode::new(iri));
                }
                owl2::DATA_PROPERTY => {
                    let iri = child.iri()?.to_string();
                    self.model
                        .data_properties
                        .entry(iri.clone())
                        .or_insert_with(|| PropertyNode::new(iri));
                }
                owl2::OBJECT_PROPERTY => {
                    let iri = child.iri()?.to_string();
                    self.model
                        .object_properties
                        .entry(iri.clone())
                        .or_insert_with(|| PropertyNode::new(iri));
                }
                owl2::ANNOTATION_PROPERTY => {
                    let iri = child.iri()?.to_string();
                    self.model
                        .annotation_properties
                        .entry(iri.clone())
                        .or_insert_with(|| PropertyNode::new(iri));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn on_subclass_of(&mut self, elem: &Frame) -> Result<()> {
        let classes: Vec<&Frame> = elem
            .children
            .iter()
            .filter(|c| self.is_owl(c) && c.local == owl2::CLASS)
            .collect();
        if classes.len() != 2 {
            // One side is an anonymous class expression; only direct
            // named-class subsumption is modeled.
            debug!(
                named_classes = classes.len(),
                "skipping SubClassOf without exactly two named classes"
            );
            return Ok(());
        }
        let sub = classes[0].iri()?.to_string();
        let sup = classes[1].iri()?.to_string();
        self.pending_subclasses.push((sub, sup));
        Ok(())
    }

    fn on_annotation_assertion(&mut self, elem: &Frame) -> Result<()> {
        let mut kind = None;
        let props: Vec<&Frame> = elem
            .children
            .iter()
            .filter(|c| self.is_owl(c) && c.local == owl2::ANNOTATION_PROPERTY)
            .collect();
        for prop in props {
            let iri = prop.iri()?.to_string();
            if kind.is_none() {
                if is_label_iri(&iri) {
                    kind = Some(AnnotationKind::Label);
                } else if is_comment_iri(&iri) {
                    kind = Some(AnnotationKind::Comment);
                }
            }
            // every assertion also counts as an annotation-property sighting
            self.model
                .annotation_properties
                .entry(iri.clone())
                .or_insert_with(|| PropertyNode::new(iri));
        }

        let Some(kind) = kind else {
            return Ok(());
        };

        let literals: Vec<&Frame> = elem
            .children
            .iter()
            .filter(|c| self.is_owl(c) && c.local == owl2::LITERAL)
            .collect();
        let text = match literals.as_slice() {
            [] => {
                return Err(ParseError::LiteralNotFound {
                    kind: kind.as_str(),
                })
            }
            [only] => only.text.clone(),
            _ => {
                return Err(ParseError::MultipleLiterals {
                    kind: kind.as_str(),
                })
            }
        };

        let targets = elem
            .children
            .iter()
            .filter(|c| {
                self.is_owl(c) && (c.local == owl2::IRI || c.local == owl2::ABBREVIATED_IRI)
            })
            .map(|c| c.text.trim().to_string())
            .collect();

        self.pending_annotations.push(PendingAnnotation {
            kind,
            text,
            targets,
        });
        Ok(())
    }

    /// Stream exhausted: check the document was usable, then materialize
    /// subclass edges and apply buffered labels and comments.
    fn finish(mut self) -> Result<OntologyModel> {
        if self.model.classes.is_empty() {
            return Err(ParseError::EmptyOntology);
        }

        for (sub, sup) in self.pending_subclasses.drain(..) {
            // forward or entirely undeclared references get stub nodes
            self.model
                .classes
                .entry(sup.clone())
                .or_insert_with(|| ClassNode::new(sup.clone()))
                .children
                .insert(sub.clone());
            self.model
                .classes
                .entry(sub.clone())
                .or_insert_with(|| ClassNode::new(sub.clone()))
                .parents
                .insert(sup);
        }

        for annotation in self.pending_annotations.drain(..) {
            match annotation.kind {
                AnnotationKind::Label => {
                    for target in &annotation.targets {
                        if !self.model.apply_label(target, &annotation.text) {
                            debug!(
                                target = %target,
                                "label target does not resolve to any node"
                            );
                        }
                    }
                }
                AnnotationKind::Comment => {
                    self.model.comments.push(annotation.text);
                }
            }
        }

        Ok(self.model)
    }
}

/// Split a qualified XML name (e.g., `owl:Class`) into (prefix, local).
fn split_qname(name: &[u8]) -> (String, String) {
    let name_str = String::from_utf8_lossy(name);
    if let Some(pos) = name_str.find(':') {
        (name_str[..pos].to_string(), name_str[pos + 1..].to_string())
    } else {
        (String::new(), name_str.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r##"<?xml version="1.0"?>
<Ontology xmlns="http://www.w3.org/2002/07/owl#"
          ontologyIRI="http://example.org/food">"##;

    fn doc(body: &str) -> String {
        format!("{HEADER}\n{body}\n</Ontology>")
    }

    #[tokio::test]
    async fn test_declarations_fill_category_maps() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Food"/></Declaration>
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <Declaration><ObjectProperty IRI="#hasTopping"/></Declaration>
            <Declaration><DataProperty IRI="#hasCalories"/></Declaration>
            <Declaration><AnnotationProperty abbreviatedIRI="rdfs:label"/></Declaration>
        "##))
        .await
        .unwrap();

        assert_eq!(model.classes.len(), 2);
        assert_eq!(model.object_properties.len(), 1);
        assert_eq!(model.data_properties.len(), 1);
        assert_eq!(model.annotation_properties.len(), 1);
        assert!(model.classes.contains_key("#Pizza"));
        assert!(model.annotation_properties.contains_key("rdfs:label"));
    }

    #[tokio::test]
    async fn test_subclass_edges_resolved_after_stream() {
        let model = parse_str(&doc(r##"
            <SubClassOf><Class IRI="#Pizza"/><Class IRI="#Food"/></SubClassOf>
            <Declaration><Class IRI="#Food"/></Declaration>
            <Declaration><Class IRI="#Pizza"/></Declaration>
        "##))
        .await
        .unwrap();

        assert!(model.classes["#Food"].children.contains("#Pizza"));
        assert!(model.classes["#Pizza"].parents.contains("#Food"));
    }

    #[tokio::test]
    async fn test_undeclared_superclass_gets_stub() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <SubClassOf><Class IRI="#Pizza"/><Class IRI="#Food"/></SubClassOf>
        "##))
        .await
        .unwrap();

        let stub = &model.classes["#Food"];
        assert_eq!(stub.label, None);
        assert!(stub.children.contains("#Pizza"));
        assert!(model.classes["#Pizza"].parents.contains("#Food"));
    }

    #[tokio::test]
    async fn test_subclass_with_anonymous_side_is_skipped() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <SubClassOf>
                <Class IRI="#Pizza"/>
                <ObjectSomeValuesFrom>
                    <ObjectProperty IRI="#hasTopping"/>
                    <Class IRI="#Topping"/>
                </ObjectSomeValuesFrom>
            </SubClassOf>
        "##))
        .await
        .unwrap();

        // the nested Class sits at depth 3, so only one depth-2 Class child
        assert!(model.classes["#Pizza"].parents.is_empty());
        assert!(!model.classes.contains_key("#Topping"));
    }

    #[tokio::test]
    async fn test_label_applied_to_target() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Pizza</IRI>
                <Literal>pizza</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.classes["#Pizza"].label.as_deref(), Some("pizza"));
        assert_eq!(model.classes["#Pizza"].display_name(), "pizza");
        assert!(model.annotation_properties.contains_key("rdfs:label"));
    }

    #[tokio::test]
    async fn test_label_with_expanded_property_iri() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty IRI="http://www.w3.org/2000/01/rdf-schema#label"/>
                <IRI>#Pizza</IRI>
                <Literal>pizza</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.classes["#Pizza"].label.as_deref(), Some("pizza"));
    }

    #[tokio::test]
    async fn test_label_applied_to_multiple_targets() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <Declaration><Class IRI="#Pie"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Pizza</IRI>
                <IRI>#Pie</IRI>
                <Literal>flat bread</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.classes["#Pizza"].label.as_deref(), Some("flat bread"));
        assert_eq!(model.classes["#Pie"].label.as_deref(), Some("flat bread"));
    }

    #[tokio::test]
    async fn test_unresolvable_label_target_ignored() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Nothing</IRI>
                <Literal>ghost</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.classes["#Pizza"].label, None);
    }

    #[tokio::test]
    async fn test_comment_collected_once_per_assertion() {
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:comment"/>
                <IRI>#Pizza</IRI>
                <Literal>A baked dish of Italian origin.</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.comments, vec!["A baked dish of Italian origin."]);
    }

    #[tokio::test]
    async fn test_label_without_literal_fails() {
        let err = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Pizza</IRI>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap_err();

        assert!(matches!(err, ParseError::LiteralNotFound { kind: "label" }));
    }

    #[tokio::test]
    async fn test_label_with_two_literals_fails() {
        let err = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Pizza</IRI>
                <Literal>one</Literal>
                <Literal>two</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap_err();

        assert!(matches!(err, ParseError::MultipleLiterals { kind: "label" }));
    }

    #[tokio::test]
    async fn test_annotation_property_registered_once() {
        // declared and then seen in an assertion: one map entry
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <Declaration><AnnotationProperty abbreviatedIRI="rdfs:label"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:label"/>
                <IRI>#Pizza</IRI>
                <Literal>pizza</Literal>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert_eq!(model.annotation_properties.len(), 1);
    }

    #[tokio::test]
    async fn test_non_label_annotation_needs_no_literal() {
        // seeAlso is neither label nor comment; literal rules don't apply
        let model = parse_str(&doc(r##"
            <Declaration><Class IRI="#Pizza"/></Declaration>
            <AnnotationAssertion>
                <AnnotationProperty abbreviatedIRI="rdfs:seeAlso"/>
                <IRI>#Pizza</IRI>
            </AnnotationAssertion>
        "##))
        .await
        .unwrap();

        assert!(model.annotation_properties.contains_key("rdfs:seeAlso"));
        assert!(model.comments.is_empty());
    }

    #[tokio::test]
    async fn test_declaration_without_iri_attribute_fails() {
        let err = parse_str(&doc("<Declaration><Class/></Declaration>"))
            .await
            .unwrap_err();
        assert!(matches!(err, ParseError::IriNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_ontology_fails() {
        let err = parse_str(&doc("")).await.unwrap_err();
        assert!(matches!(err, ParseError::EmptyOntology));

        // subclass axioms alone do not make the document usable either
        let err = parse_str(&doc(
            r##"<SubClassOf><Class IRI="#A"/><Class IRI="#B"/></SubClassOf>"##,
        ))
        .await
        .unwrap_err();
        assert!(matches!(err, ParseError::EmptyOntology));
    }

    #[tokio::test]
    async fn test_owl_prefixed_document() {
        // same constructs, declared under an owl: prefix instead of the
        // default namespace
        let model = parse_str(
            r##"<?xml version="1.0"?>
<owl:Ontology xmlns:owl="http://www.w3.org/2002/07/owl#">
    <owl:Declaration><owl:Class IRI="#Food"/></owl:Declaration>
    <owl:Declaration><owl:Class IRI="#Pizza"/></owl:Declaration>
    <owl:SubClassOf><owl:Class IRI="#Pizza"/><owl:Class IRI="#Food"/></owl:SubClassOf>
</owl:Ontology>"##,
        )
        .await
        .unwrap();

        assert_eq!(model.classes.len(), 2);
        assert!(model.classes["#Pizza"].parents.contains("#Food"));
    }

    #[tokio::test]
    async fn test_foreign_namespace_elements_ignored() {
        let model = parse_str(
            r##"<?xml version="1.0"?>
<Ontology xmlns="http://www.w3.org/2002/07/owl#"
          xmlns:dc="http://purl.org/dc/elements/1.1/">
    <Declaration><Class IRI="#Pizza"/></Declaration>
    <dc:Declaration><dc:Class IRI="#NotOwl"/></dc:Declaration>
</Ontology>"##,
        )
        .await
        .unwrap();

        assert_eq!(model.classes.len(), 1);
        assert!(!model.classes.contains_key("#NotOwl"));
    }

    #[tokio::test]
    async fn test_iri_attribute_checked_before_abbreviated() {
        let model = parse_str(&doc(
            r##"<Declaration><Class IRI="#Full" abbreviatedIRI="ex:Short"/></Declaration>"##,
        ))
        .await
        .unwrap();
        assert!(model.classes.contains_key("#Full"));
        assert!(!model.classes.contains_key("ex:Short"));
    }
}
