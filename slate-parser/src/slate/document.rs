//! Document tree for the XML authoring dialect
//!
//! The tree is deliberately generic: an element is just a tag, its
//! attributes in source order, the text that appeared before its first
//! child, and its children. Vocabulary checks (which tags mean what, which
//! attributes are required) belong to the serializer, not to this model.
//!
//! Traversal is the one piece with real contract weight: `Element::iter`
//! yields the element itself and every descendant in document order
//! (pre-order, depth-first), because emission order is defined as exactly
//! that order.

/// A single element of the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in source order. Lookup returns the first occurrence.
    pub attributes: Vec<(String, String)>,
    /// Text content before the first child element, if any.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style attribute helper, mainly for tests.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// The element and all its descendants in document order.
    pub fn iter(&self) -> DescendantIter<'_> {
        DescendantIter { stack: vec![self] }
    }
}

/// Pre-order, depth-first walk over an element and its descendants.
///
/// Implemented as an explicit stack so the emission order guarantee does
/// not depend on recursion depth.
pub struct DescendantIter<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for DescendantIter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let element = self.stack.pop()?;
        // Push children in reverse so the leftmost child is popped first.
        for child in element.children.iter().rev() {
            self.stack.push(child);
        }
        Some(element)
    }
}
