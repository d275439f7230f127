//! In-memory document tree.
//!
//! Responsibilities:
//! - Own every node of a page in a single arena addressed by [`NodeId`].
//! - Provide the small set of DOM operations the views need (create, append,
//!   clone, attribute and text access, lookup by `id`).
//! - Serialise the tree as HTML or as an indented outline (see `serialize`).
//!
//! Does NOT handle:
//! - Parsing HTML. Pages are built programmatically.
//! - Node removal. The tree is append-only apart from `set_text_content`.
//!
//! Invariants:
//! - A node has at most one parent; `append_child` refuses attached nodes.
//! - A node is never appended into its own subtree.
//! - `NodeId`s are only meaningful for the document that created them.

mod serialize;

use thiserror::Error;

/// Handle to a node owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Errors from document tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),

    #[error("node {0:?} does not belong to this document")]
    UnknownNode(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("cannot append node {child:?} inside its own subtree")]
    HierarchyRequest { child: NodeId },
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree with a single `body` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    /// Set or replace an attribute on an element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        match &mut self.node_mut(node)?.kind {
            NodeKind::Element { attributes, .. } => {
                match attributes.iter_mut().find(|(n, _)| n == name) {
                    Some((_, v)) => *v = value.to_string(),
                    None => attributes.push((name.to_string(), value.to_string())),
                }
                Ok(())
            }
            NodeKind::Text(_) => Err(DomError::NotAnElement(node)),
        }
    }

    /// Replace the content of a node with `text`.
    ///
    /// On an element the previous children are detached and a single text
    /// child is appended (none when `text` is empty).
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        if let NodeKind::Text(content) = &mut self.node_mut(node)?.kind {
            *content = text.to_string();
            return Ok(());
        }

        let old = std::mem::take(&mut self.node_mut(node)?.children);
        for child in old {
            self.node_mut(child)?.parent = None;
        }

        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(node, text_node)?;
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`. Returns `child`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        if let NodeKind::Text(_) = self.node(parent)?.kind {
            return Err(DomError::NotAnElement(parent));
        }
        if self.node(child)?.parent.is_some() || child == self.root {
            return Err(DomError::AlreadyAttached(child));
        }
        if self.is_inclusive_ancestor(child, parent)? {
            return Err(DomError::HierarchyRequest { child });
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(child)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool, DomError> {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.node(id)?.parent;
        }
        Ok(false)
    }

    /// Copy a node into a new detached node; `deep` also copies descendants.
    pub fn clone_node(&mut self, node: NodeId, deep: bool) -> Result<NodeId, DomError> {
        let kind = self.node(node)?.kind.clone();
        let copy = self.push(kind);
        if deep {
            let children = self.node(node)?.children.clone();
            for child in children {
                let child_copy = self.clone_node(child, true)?;
                self.append_child(copy, child_copy)?;
            }
        }
        Ok(copy)
    }

    /// First attached element, in document order, whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            if self.attribute(current, "id") == Some(id) {
                return Some(current);
            }
            stack.extend(self.children(current).iter().rev());
        }
        None
    }

    /// Children of a node, in order. Empty for unknown handles.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Concatenated text of a node and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &n.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Tag name of an element; `None` for text nodes and unknown handles.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Child elements of `node` with the given tag, in order.
    pub fn child_elements<'a>(
        &'a self,
        node: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(node)
            .iter()
            .copied()
            .filter(move |c| self.tag_name(*c) == Some(tag))
    }

    /// Create an element with the given text and append it to `parent`.
    pub fn append_element_with_text(
        &mut self,
        parent: NodeId,
        tag: &str,
        text: &str,
    ) -> Result<NodeId, DomError> {
        let element = self.create_element(tag);
        self.set_text_content(element, text)?;
        self.append_child(parent, element)
    }
}
