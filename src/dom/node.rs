use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

/// Element state the form controller reads and writes.
///
/// Attributes hold the markup-level data (`id`, `name`, `class`, `type`);
/// live form state (`value`, `checked`, `disabled`) and rendering state
/// (`display`, `text`) are kept as separate fields, like a browser keeps
/// properties apart from attributes.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
    pub(crate) display: Option<String>,
    pub(crate) text: String,
}

impl Element {
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The `name` attribute, or an empty string like `HTMLInputElement.name`.
    pub fn name(&self) -> &str {
        self.attr("name").unwrap_or("")
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        has_class(self, class_name)
    }

    pub fn classes(&self) -> Vec<String> {
        class_tokens(self.attr("class"))
    }
}

pub(crate) fn has_class(element: &Element, class_name: &str) -> bool {
    element
        .attrs
        .get("class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

pub(crate) fn class_tokens(class_attr: Option<&str>) -> Vec<String> {
    class_attr
        .map(|value| {
            value
                .split_whitespace()
                .filter(|token| !token.is_empty())
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

pub(crate) fn set_class_attr(element: &mut Element, classes: &[String]) {
    if classes.is_empty() {
        element.attrs.remove("class");
    } else {
        element.attrs.insert("class".to_string(), classes.join(" "));
    }
}

/// Declarative description of an element to append to a document.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    pub(crate) element: Element,
}

impl ElementSpec {
    pub fn new(tag_name: &str) -> Self {
        Self {
            element: Element {
                tag_name: tag_name.to_ascii_lowercase(),
                ..Element::default()
            },
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: &str) -> Self {
        self.attr("name", name)
    }

    pub fn class(mut self, class_name: &str) -> Self {
        let mut classes = class_tokens(self.element.attr("class"));
        for token in class_name.split_whitespace() {
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
        set_class_attr(&mut self.element, &classes);
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element
            .attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn input_type(self, input_type: &str) -> Self {
        self.attr("type", input_type)
    }

    pub fn value(mut self, value: &str) -> Self {
        self.element.value = value.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.element.text = text.to_string();
        self
    }

    pub fn display(mut self, display: &str) -> Self {
        self.element.display = Some(display.to_string());
        self
    }
}
