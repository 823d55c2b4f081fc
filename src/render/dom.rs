// SPDX-License-Identifier: MIT
//! Minimal owned element tree.
//!
//! Stands in for the host page: the renderer mounts element subtrees into a
//! [`Document`], the live updater mutates nodes by id, and the serializer
//! turns the whole thing into HTML. Text and attribute values are escaped at
//! serialization time, so no interpolation path can bypass the escaper.

/// Escape the five characters that must never reach HTML unencoded.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One element in the tree.
///
/// Built with the chainable `with_*` constructors; text content and children
/// are both allowed, text serializing first.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Serialize this element and its subtree, escaping everything
    /// interpolated from outside.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            out.push_str(&format!(r#" id="{}""#, escape_html(id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(
                r#" class="{}""#,
                escape_html(&self.classes.join(" "))
            ));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

/// The mounted announcement plus page-level side effects.
#[derive(Debug, Clone, Default)]
pub struct Document {
    roots: Vec<Element>,
    scroll_locked: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the top of the body (banner position).
    pub fn prepend(&mut self, element: Element) {
        self.roots.insert(0, element);
    }

    /// Append to the end of the body (overlay position).
    pub fn append(&mut self, element: Element) {
        self.roots.push(element);
    }

    /// Disable page scrolling for the lifetime of the document.
    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Replace the text content of the element with `id`.
    ///
    /// Returns false when no such element is mounted.
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.roots.iter_mut().find_map(|r| r.find_mut(id)) {
            Some(el) => {
                el.text = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    /// Set (or overwrite) an attribute on the element with `id`.
    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.roots.iter_mut().find_map(|r| r.find_mut(id)) {
            Some(el) => {
                el.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    /// Text content of the element with `id`, if mounted.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.roots.iter().find_map(|r| r.find(id)).and_then(|e| e.text())
    }

    /// Attribute value on the element with `id`, if mounted.
    pub fn attr_of(&self, id: &str, name: &str) -> Option<&str> {
        self.roots
            .iter()
            .find_map(|r| r.find(id))
            .and_then(|e| e.attr(name))
    }

    /// Serialize the mounted trees as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            root.write_html(&mut out);
            out.push('\n');
        }
        out
    }
}
