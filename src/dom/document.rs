use std::collections::HashMap;

use super::node::{class_tokens, has_class, set_class_attr, Element, ElementSpec, Node, NodeId, NodeType};

/// Arena-backed element tree.
///
/// Nodes are never removed, so a `NodeId` stays valid for the lifetime of
/// the document. Mutating accessors silently ignore ids that do not name an
/// element; callers holding optional handles rely on that.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, Vec<NodeId>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                node_type: NodeType::Document,
            }],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a new element under `parent` and returns its id.
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(dom_id) = spec.element.id() {
            self.id_index.entry(dom_id.to_string()).or_default().push(id);
        }
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            node_type: NodeType::Element(spec.element),
        });
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes.get(node.0)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node.0)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    /// First element in document order carrying `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index
            .get(id)
            .and_then(|nodes| nodes.iter().copied().min_by_key(|node| node.0))
    }

    /// Descendants of `scope` (excluding `scope` itself) in document order.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(scope.0) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.nodes.get(next.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn query_all_by_class(&self, scope: NodeId, class_name: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|node| self.element(*node).is_some_and(|el| has_class(el, class_name)))
            .collect()
    }

    pub fn query_by_class(&self, scope: NodeId, class_name: &str) -> Option<NodeId> {
        self.query_all_by_class(scope, class_name).into_iter().next()
    }

    pub fn query_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|node| self.element(*node).and_then(Element::id) == Some(id))
    }

    pub fn query_all_by_tag(&self, scope: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|node| {
                self.element(*node)
                    .is_some_and(|el| tags.iter().any(|tag| el.tag_name == *tag))
            })
            .collect()
    }

    pub fn query_by_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.query_all_by_tag(scope, &[tag]).into_iter().next()
    }

    /// Nearest inclusive ancestor of `node` carrying `class_name`.
    pub fn closest_with_class(&self, node: NodeId, class_name: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if self.element(candidate).is_some_and(|el| has_class(el, class_name)) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.element(node).is_some_and(|el| has_class(el, class_name))
    }

    pub fn add_class(&mut self, node: NodeId, class_name: &str) {
        self.toggle_class(node, class_name, true);
    }

    pub fn remove_class(&mut self, node: NodeId, class_name: &str) {
        self.toggle_class(node, class_name, false);
    }

    /// `classList.toggle(name, force)`.
    pub fn toggle_class(&mut self, node: NodeId, class_name: &str, force: bool) {
        let Some(element) = self.element_mut(node) else {
            return;
        };
        let mut classes = class_tokens(element.attr("class"));
        let present = classes.iter().any(|c| c == class_name);
        if force && !present {
            classes.push(class_name.to_string());
        } else if !force && present {
            classes.retain(|c| c != class_name);
        } else {
            return;
        }
        set_class_attr(element, &classes);
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(node) {
            element
                .attrs
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    /// Input type, defaulting to `text` like `HTMLInputElement.type`.
    pub fn input_type(&self, node: NodeId) -> &str {
        self.attr(node, "type").unwrap_or("text")
    }

    pub fn set_input_type(&mut self, node: NodeId, input_type: &str) {
        self.set_attr(node, "type", input_type);
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map(Element::value).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(element) = self.element_mut(node) {
            element.value = value.to_string();
        }
    }

    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(Element::checked)
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(element) = self.element_mut(node) {
            element.checked = checked;
        }
    }

    pub fn disabled(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(Element::disabled)
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(element) = self.element_mut(node) {
            element.disabled = disabled;
        }
    }

    pub fn display(&self, node: NodeId) -> Option<&str> {
        self.element(node)?.display()
    }

    pub fn set_display(&mut self, node: NodeId, display: &str) {
        if let Some(element) = self.element_mut(node) {
            element.display = Some(display.to_string());
        }
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map(Element::text).unwrap_or("")
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.element_mut(node) {
            element.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), ElementSpec::new("form").id("f"));
        let wrapper = doc.append(form, ElementSpec::new("div").class("wrap"));
        let input = doc.append(wrapper, ElementSpec::new("input").id("pw").class("form-input"));
        (doc, form, wrapper, input)
    }

    #[test]
    fn descendants_are_in_document_order() {
        let (mut doc, form, wrapper, input) = sample();
        let button = doc.append(form, ElementSpec::new("button"));
        assert_eq!(doc.descendants(form), vec![wrapper, input, button]);
        assert_eq!(doc.query_all_by_tag(form, &["input", "button"]), vec![input, button]);
    }

    #[test]
    fn closest_includes_the_node_itself() {
        let (doc, form, wrapper, input) = sample();
        assert_eq!(doc.closest_with_class(input, "wrap"), Some(wrapper));
        assert_eq!(doc.closest_with_class(input, "form-input"), Some(input));
        assert_eq!(doc.closest_with_class(form, "wrap"), None);
    }

    #[test]
    fn toggle_class_is_idempotent() {
        let (mut doc, _, _, input) = sample();
        doc.add_class(input, "error");
        doc.add_class(input, "error");
        assert_eq!(doc.attr(input, "class"), Some("form-input error"));
        doc.remove_class(input, "error");
        doc.remove_class(input, "error");
        assert_eq!(doc.attr(input, "class"), Some("form-input"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let (mut doc, _, _, _) = sample();
        let root = doc.root();
        doc.set_value(root, "ignored");
        assert_eq!(doc.value(root), "");
        assert_eq!(doc.get_element_by_id("missing"), None);
        assert_eq!(doc.get_element_by_id("pw").map(|n| doc.input_type(n)), Some("text"));
    }
}
