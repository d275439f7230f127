//! HTML and outline serialisation for [`Document`].

use std::fmt::Write;

use super::{Document, NodeId, NodeKind};

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "input", "meta", "link", "img"];

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

impl Document {
    /// Serialise the whole tree, starting at the root element.
    pub fn to_html(&self) -> String {
        self.node_to_html(self.root)
    }

    /// Serialise one node and its descendants.
    pub fn node_to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => escape_text(text, out),
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attribute(value, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in &n.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    /// Indented one-node-per-line rendering, for terminals and test diffs.
    ///
    /// Elements show as `tag#id.class`, text nodes as quoted strings.
    pub fn to_outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(self.root, 0, &mut out);
        out
    }

    fn write_outline(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        let indent = "  ".repeat(depth);
        match &n.kind {
            NodeKind::Text(text) => {
                let _ = writeln!(out, "{}{:?}", indent, text);
            }
            NodeKind::Element { tag, .. } => {
                let mut label = tag.clone();
                if let Some(id) = self.attribute(node, "id") {
                    label.push('#');
                    label.push_str(id);
                }
                if let Some(class) = self.attribute(node, "class") {
                    for part in class.split_whitespace() {
                        label.push('.');
                        label.push_str(part);
                    }
                }
                if let Some(value) = self.attribute(node, "value") {
                    let _ = write!(label, " [value={:?}]", value);
                }
                let _ = writeln!(out, "{}{}", indent, label);
                for child in &n.children {
                    self.write_outline(*child, depth + 1, out);
                }
            }
        }
    }
}
