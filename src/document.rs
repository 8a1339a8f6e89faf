//! Document index and reference resolution.
//!
//! Workflow exports reference entities by tag name at arbitrary depth, so
//! instead of re-walking the tree on every lookup, [`TagIndex`] records every
//! element once, keyed by tag name, in document order. The free functions
//! below implement the field-access conventions of the export format: field
//! values live in child element text, and foreign-key-style references live
//! in a `display_value` attribute on a child element.

use ahash::AHashMap;
use roxmltree::{Document, Node};

/// The attribute the export format uses to embed a reference to another
/// entity on a child element.
pub const DISPLAY_VALUE_ATTR: &str = "display_value";

/// An index of every element in a document, keyed by tag name.
///
/// Built in a single pass; lookups return nodes in document order. The index
/// only borrows the document, so it is as cheap to discard as it is to build.
pub struct TagIndex<'a, 'input> {
    by_tag: AHashMap<&'input str, Vec<Node<'a, 'input>>>,
}

impl<'a, 'input> TagIndex<'a, 'input> {
    pub fn build(document: &'a Document<'input>) -> Self {
        let mut by_tag: AHashMap<&'input str, Vec<Node<'a, 'input>>> = AHashMap::new();
        for node in document.descendants().filter(Node::is_element) {
            by_tag.entry(node.tag_name().name()).or_default().push(node);
        }
        Self { by_tag }
    }

    /// All elements with the given tag name, in document order.
    pub fn all(&self, tag: &str) -> &[Node<'a, 'input>] {
        self.by_tag.get(tag).map_or(&[], Vec::as_slice)
    }

    /// The first element with the given tag name, if any.
    pub fn first(&self, tag: &str) -> Option<Node<'a, 'input>> {
        self.all(tag).first().copied()
    }
}

/// Returns the text content of the first descendant of `node` with the given
/// tag name, or `""` if the descendant is absent or empty.
pub fn text_of(node: Node, child_tag: &str) -> String {
    node.descendants()
        .find(|n| n.has_tag_name(child_tag))
        .and_then(|n| n.text())
        .unwrap_or_default()
        .to_string()
}

/// Returns the named attribute of the first descendant of `node` with the
/// given tag name, or `""` if the descendant or the attribute is absent.
pub fn attr_of(node: Node, child_tag: &str, attribute: &str) -> String {
    node.descendants()
        .find(|n| n.has_tag_name(child_tag))
        .and_then(|n| n.attribute(attribute))
        .unwrap_or_default()
        .to_string()
}

/// Resolves a `display_value`-style reference carried by a child element.
///
/// The export format embeds foreign-key ids as an attribute on a child
/// element rather than as element text; every cross-reference read in the
/// extractors goes through this accessor so the convention is stated in one
/// place.
pub fn resolve_reference(node: Node, child_tag: &str) -> String {
    attr_of(node, child_tag, DISPLAY_VALUE_ATTR)
}
