//! Read-only tree queries over a parsed store document.
//!
//! The store's XML is a visual-layout tree, so extractors navigate by
//! structural position: first child of a given tag, all descendants of a
//! tag in document order, an attribute here, a trimmed text there. This
//! module parses the whole document once into a flat arena (pre-order, so
//! a node's subtree is a contiguous index range) and hands out cheap
//! [`Node`] handles for querying it.

use cadenza_core::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed document. Owns every node; queries go through [`Node`].
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

#[derive(Debug)]
struct NodeData {
    name: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Exclusive end of this node's pre-order index range.
    subtree_end: usize,
}

impl Document {
    /// Parse a document. Fails only on XML that is not well-formed; an
    /// unexpected but well-formed layout parses fine and simply yields
    /// empty query results downstream.
    pub fn parse(xml: &str) -> Result<Self, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let index = push_node(&mut nodes, &stack, &e);
                    stack.push(index);
                }
                Ok(Event::Empty(e)) => {
                    let index = push_node(&mut nodes, &stack, &e);
                    nodes[index].subtree_end = index + 1;
                }
                Ok(Event::Text(e)) => {
                    if let Some(&top) = stack.last() {
                        let text = e.unescape().unwrap_or_default();
                        nodes[top].text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(&top) = stack.last() {
                        nodes[top]
                            .text
                            .push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(index) = stack.pop() {
                        nodes[index].subtree_end = nodes.len();
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ExtractionError::Malformed(e.to_string())),
            }
        }

        if !stack.is_empty() {
            return Err(ExtractionError::Malformed(
                "document ended with unclosed elements".to_string(),
            ));
        }
        if nodes.is_empty() {
            return Err(ExtractionError::Malformed(
                "document has no root element".to_string(),
            ));
        }

        Ok(Self { nodes })
    }

    /// The document's root element.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            index: 0,
        }
    }
}

fn push_node(
    nodes: &mut Vec<NodeData>,
    stack: &[usize],
    e: &quick_xml::events::BytesStart<'_>,
) -> usize {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let attrs = e
        .attributes()
        .flatten()
        .filter_map(|attr| {
            let key = std::str::from_utf8(attr.key.as_ref()).ok()?.to_string();
            let value = attr.unescape_value().ok()?.into_owned();
            Some((key, value))
        })
        .collect();

    let parent = stack.last().copied();
    let index = nodes.len();
    nodes.push(NodeData {
        name,
        attrs,
        text: String::new(),
        parent,
        children: Vec::new(),
        subtree_end: index + 1,
    });
    if let Some(p) = parent {
        nodes[p].children.push(index);
    }
    index
}

/// A handle to one element of a [`Document`]. Copy; all queries are
/// read-only and restartable.
#[derive(Debug, Clone, Copy)]
pub struct Node<'doc> {
    doc: &'doc Document,
    index: usize,
}

impl<'doc> Node<'doc> {
    fn data(&self) -> &'doc NodeData {
        &self.doc.nodes[self.index]
    }

    /// Element tag name.
    pub fn name(&self) -> &'doc str {
        &self.data().name
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&'doc str> {
        self.data()
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text content of this element, trimmed.
    pub fn text(&self) -> &'doc str {
        self.data().text.trim()
    }

    /// All direct element children, in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'doc>> + 'doc {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&index| Node { doc, index })
    }

    /// Direct children with the given tag, in document order.
    pub fn children_named<'a>(&self, tag: &'a str) -> impl Iterator<Item = Node<'doc>> + 'a
    where
        'doc: 'a,
    {
        self.children().filter(move |n| n.name() == tag)
    }

    /// First direct child with the given tag.
    pub fn first_child(&self, tag: &str) -> Option<Node<'doc>> {
        self.children_named(tag).next()
    }

    /// Last direct child with the given tag.
    pub fn last_child(&self, tag: &str) -> Option<Node<'doc>> {
        self.children_named(tag).last()
    }

    /// All descendants with the given tag, in document order. Lazy and
    /// restartable per call.
    pub fn descendants_named<'a>(&self, tag: &'a str) -> impl Iterator<Item = Node<'doc>> + 'a
    where
        'doc: 'a,
    {
        let doc = self.doc;
        (self.index + 1..self.data().subtree_end)
            .filter(move |&index| doc.nodes[index].name == tag)
            .map(move |index| Node { doc, index })
    }

    /// Parent element, if this is not the root.
    pub fn parent(&self) -> Option<Node<'doc>> {
        self.data().parent.map(|index| Node {
            doc: self.doc,
            index,
        })
    }

    /// The element immediately following this one under the same parent.
    pub fn next_sibling(&self) -> Option<Node<'doc>> {
        self.following_siblings().next()
    }

    /// The next following sibling with the given tag.
    pub fn next_sibling_named(&self, tag: &str) -> Option<Node<'doc>> {
        self.following_siblings_named(tag).next()
    }

    /// All following siblings, in document order.
    pub fn following_siblings(&self) -> impl Iterator<Item = Node<'doc>> + 'doc {
        let doc = self.doc;
        let index = self.index;
        let siblings: &'doc [usize] = self
            .parent()
            .map_or(&[], |parent| parent.data().children.as_slice());
        let position = siblings.iter().position(move |&i| i == index);
        siblings
            .iter()
            .skip(position.map_or(usize::MAX, |p| p + 1))
            .map(move |&i| Node { doc, index: i })
    }

    /// All following siblings with the given tag, in document order.
    pub fn following_siblings_named<'a>(
        &self,
        tag: &'a str,
    ) -> impl Iterator<Item = Node<'doc>> + 'a
    where
        'doc: 'a,
    {
        self.following_siblings().filter(move |n| n.name() == tag)
    }
}
