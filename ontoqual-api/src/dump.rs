//! Human-readable diagnostic dumps of a resolved model.
//!
//! Diagnostic only — not part of the report contract. The pipeline renders
//! these when the debug flag is set and the CLI prints them to stderr.

use ontoqual_owl_xml::{ClassNode, OntologyModel};

/// Render each hierarchy tree root-down with two-space indentation.
/// Stand-alone roots (no children) are skipped.
pub fn render_tree(model: &OntologyModel) -> String {
    let mut out = String::new();
    let mut roots: Vec<&ClassNode> = model
        .classes
        .values()
        .filter(|n| n.is_root && !n.children.is_empty())
        .collect();
    roots.sort_by(|a, b| a.iri.cmp(&b.iri));

    for root in roots {
        out.push_str("------\n Tree\n------\n");
        render_subtree(model, root, 0, &mut out);
    }
    out
}

fn render_subtree(model: &OntologyModel, node: &ClassNode, level: usize, out: &mut String) {
    out.push_str(&"  ".repeat(level));
    out.push_str(node.display_name());
    out.push('\n');
    // children are a BTreeSet, so the listing order is stable
    for child_iri in &node.children {
        if let Some(child) = model.classes.get(child_iri) {
            render_subtree(model, child, level + 1, out);
        }
    }
}

/// Render labeled classes sorted by IRI, one `iri display-form` line each.
pub fn render_labeled(model: &OntologyModel) -> String {
    let mut out = String::from("-----------------------\n Labeled Nodes (by IRI)\n-----------------------\n");
    let mut labeled: Vec<&ClassNode> = model
        .classes
        .values()
        .filter(|n| n.label.is_some())
        .collect();
    labeled.sort_by(|a, b| a.iri.cmp(&b.iri));
    for node in labeled {
        out.push_str(&format!("{} {}\n", node.iri, node.display_name()));
    }
    out
}

/// Render unlabeled class IRIs, sorted.
pub fn render_unlabeled(model: &OntologyModel) -> String {
    let mut out = String::from("-----------------\n Unlabeled Nodes\n-----------------\n");
    let mut iris: Vec<&str> = model
        .classes
        .values()
        .filter(|n| n.label.is_none())
        .map(|n| n.iri.as_str())
        .collect();
    iris.sort_unstable();
    for iri in iris {
        out.push_str(iri);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> OntologyModel {
        let mut model = OntologyModel::new();
        let mut food = ClassNode::new("#Food");
        food.is_root = true;
        food.children.insert("#Pizza".into());
        let mut pizza = ClassNode::new("#Pizza");
        pizza.label = Some("pizza".into());
        pizza.parents.insert("#Food".into());
        let mut lone = ClassNode::new("#Lone");
        lone.is_root = true;
        model.classes.insert("#Food".into(), food);
        model.classes.insert("#Pizza".into(), pizza);
        model.classes.insert("#Lone".into(), lone);
        model
    }

    #[test]
    fn test_tree_skips_standalone_roots() {
        let tree = render_tree(&sample_model());
        assert!(tree.contains("#Food\n  pizza\n"));
        assert!(!tree.contains("#Lone"));
    }

    #[test]
    fn test_labeled_and_unlabeled_partition() {
        let model = sample_model();
        let labeled = render_labeled(&model);
        let unlabeled = render_unlabeled(&model);
        assert!(labeled.contains("#Pizza pizza"));
        assert!(!labeled.contains("#Food "));
        assert!(unlabeled.contains("#Food"));
        assert!(unlabeled.contains("#Lone"));
        assert!(!unlabeled.contains("#Pizza"));
    }
}
