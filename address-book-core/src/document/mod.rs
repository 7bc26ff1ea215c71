//! In-memory visual tree
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. The tree only grows: nodes can be created and appended, never
//! moved or removed. A node has at most one parent, and the root has none. Lookups by id return the first matching element in
//! creation order, which for an append-only tree is document order.

mod node;

pub use node::{Element, Node, NodeId};

use crate::error::{CoreError, CoreResult};
use crate::types::ToggleHandler;

/// Visual tree with a `body` root element.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl Document {
    /// Empty document: a lone `body` element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Element(Element::new("body"))],
            parents: vec![None],
            root: NodeId(0),
        }
    }

    /// Document whose body holds one empty `ul` container with the given id.
    pub fn with_container(container_id: &str) -> Self {
        let mut document = Self::new();
        let list = document.create_element("ul");
        document.set_id(list, container_id);
        if let Some(Node::Element(body)) = document.nodes.get_mut(document.root.0) {
            body.children.push(list);
            document.parents[list.0] = Some(document.root);
        }
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::Element(Element::new(tag)))
    }

    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.push(Node::Text(text.into()))
    }

    /// Set the id of an element. Ignored for text nodes.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(Node::Element(element)) = self.nodes.get_mut(node.0) {
            element.id = Some(id.to_string());
        }
    }

    /// Set an attribute on an element. Ignored for text nodes.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(Node::Element(element)) = self.nodes.get_mut(node.0) {
            element.set_attribute(name, value.into());
        }
    }

    /// Attach an activation handler to an element. Ignored for text nodes.
    pub fn set_handler(&mut self, node: NodeId, handler: ToggleHandler) {
        if let Some(Node::Element(element)) = self.nodes.get_mut(node.0) {
            element.handler = Some(handler);
        }
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// `child` must be a detached non-root node that does not contain `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> CoreResult<()> {
        if child.0 >= self.nodes.len() {
            return Err(CoreError::UnknownNode(child.0));
        }
        if !matches!(self.nodes.get(parent.0), Some(Node::Element(_))) {
            return Err(CoreError::NotAnElement(parent.0));
        }
        let attached = child == self.root || self.parents[child.0].is_some();
        if attached || self.is_ancestor(child, parent) {
            return Err(CoreError::HierarchyRequest(child.0));
        }

        if let Some(Node::Element(element)) = self.nodes.get_mut(parent.0) {
            element.children.push(child);
        }
        self.parents[child.0] = Some(parent);
        Ok(())
    }

    /// Parent of `id`; `None` for the root, detached nodes and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| {
                node.as_element()
                    .is_some_and(|element| element.id() == Some(id))
            })
            .map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).and_then(Node::as_element)
    }

    /// Children of `id`; empty for text nodes and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map_or(&[], Element::children)
    }

    /// Child elements of `id` carrying the given tag.
    pub fn child_elements<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.element(*child).is_some_and(|e| e.tag() == tag))
    }

    /// Concatenated text of `id` and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Markup for `id` and its subtree.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Total number of nodes ever created, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.parents.push(None);
        NodeId(self.nodes.len() - 1)
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id) {
            Some(Node::Text(text)) => out.push_str(text),
            Some(Node::Element(element)) => {
                for child in &element.children {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match self.node(id) {
            Some(Node::Text(text)) => out.push_str(&escape_html(text)),
            Some(Node::Element(element)) => {
                out.push('<');
                out.push_str(&element.tag);
                if let Some(element_id) = &element.id {
                    out.push_str(&format!(" id=\"{}\"", escape_html(element_id)));
                }
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
                }
                out.push('>');
                if element.tag == "img" {
                    return;
                }
                for child in &element.children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
            None => {}
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_is_child_of_body() {
        let doc = Document::with_container("address-list");
        let list = doc.get_element_by_id("address-list").unwrap();

        assert_eq!(doc.children(doc.root()), &[list]);
        assert_eq!(doc.element(list).unwrap().tag(), "ul");
        assert!(doc.children(list).is_empty());
    }

    #[test]
    fn append_keeps_document_order() {
        let mut doc = Document::new();
        let a = doc.create_element("li");
        let b = doc.create_text_node("b");
        let c = doc.create_element("li");
        doc.append_child(doc.root(), a).unwrap();
        doc.append_child(doc.root(), b).unwrap();
        doc.append_child(doc.root(), c).unwrap();

        assert_eq!(doc.children(doc.root()), &[a, b, c]);
        assert_eq!(doc.child_elements(doc.root(), "li").collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn text_nodes_cannot_have_children() {
        let mut doc = Document::new();
        let text = doc.create_text_node("leaf");
        let child = doc.create_element("span");

        let result = doc.append_child(text, child);
        assert!(matches!(result, Err(CoreError::NotAnElement(_))));
    }

    #[test]
    fn appending_an_ancestor_is_rejected() {
        let mut doc = Document::new();
        let outer = doc.create_element("li");
        let inner = doc.create_element("span");
        doc.append_child(outer, inner).unwrap();

        let result = doc.append_child(inner, outer);
        assert!(matches!(result, Err(CoreError::HierarchyRequest(n)) if n == outer.0));
        let result = doc.append_child(inner, inner);
        assert!(matches!(result, Err(CoreError::HierarchyRequest(_))));

        // the tree is unchanged and still finite
        assert!(doc.children(inner).is_empty());
        assert_eq!(doc.outer_html(outer), "<li><span></span></li>");
    }

    #[test]
    fn attached_node_cannot_be_appended_again() {
        let mut doc = Document::with_container("list");
        let list = doc.get_element_by_id("list").unwrap();
        let li = doc.create_element("li");
        doc.append_child(list, li).unwrap();

        let result = doc.append_child(list, li);
        assert!(matches!(result, Err(CoreError::HierarchyRequest(_))));
        let other = doc.create_element("div");
        let result = doc.append_child(other, li);
        assert!(matches!(result, Err(CoreError::HierarchyRequest(_))));

        assert_eq!(doc.children(list), &[li]);
        assert_eq!(doc.parent(li), Some(list));
    }

    #[test]
    fn root_cannot_be_appended() {
        let mut doc = Document::new();
        let div = doc.create_element("div");

        let result = doc.append_child(div, doc.root());
        assert!(matches!(result, Err(CoreError::HierarchyRequest(0))));
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn missing_id_resolves_to_none() {
        let doc = Document::with_container("address-list");
        assert!(doc.get_element_by_id("person-0").is_none());
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut doc = Document::new();
        let img = doc.create_element("img");
        doc.set_attribute(img, "src", "a.jpg");
        doc.set_attribute(img, "alt", "x");
        doc.set_attribute(img, "src", "b.jpg");

        let element = doc.element(img).unwrap();
        assert_eq!(element.attribute("src"), Some("b.jpg"));
        assert_eq!(element.attributes()[0].0, "src");
    }

    #[test]
    fn text_content_and_markup() {
        let mut doc = Document::with_container("list");
        let list = doc.get_element_by_id("list").unwrap();
        let li = doc.create_element("li");
        let img = doc.create_element("img");
        doc.set_attribute(img, "src", "t.jpg");
        let name = doc.create_text_node("Ada & co");
        doc.append_child(li, img).unwrap();
        doc.append_child(li, name).unwrap();
        doc.append_child(list, li).unwrap();

        assert_eq!(doc.text_content(list), "Ada & co");
        assert_eq!(
            doc.outer_html(list),
            "<ul id=\"list\"><li><img src=\"t.jpg\">Ada &amp; co</li></ul>"
        );
    }
}
