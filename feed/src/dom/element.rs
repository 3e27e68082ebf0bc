//! Element trees
//!
//! A deliberately small DOM: elements with an id, classes, attributes, text
//! and children, plus the handful of selectors the feed templates use.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A simple selector: `#id`, `.class`, `[attr]` or a bare tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Attr(String),
    Tag(String),
}

impl Selector {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some(id) = s.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else if let Some(class) = s.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if let Some(attr) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            Selector::Attr(attr.to_string())
        } else {
            Selector::Tag(s.to_ascii_lowercase())
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Attr(name) => element.attrs.contains_key(name),
            Selector::Tag(tag) => element.tag == *tag,
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::Attr(name) => write!(f, "[{}]", name),
            Selector::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds every whitespace-separated class in `classes`
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Own text, not including descendants
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the element's content with `text`, dropping any children
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.children.clear();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn append_children(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.extend(children);
    }

    /// First descendant matching `selector` in document order
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        for child in &self.children {
            if selector.matches(child) {
                return Some(child);
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        for child in &mut self.children {
            if selector.matches(child) {
                return Some(child);
            }
            if let Some(found) = child.find_mut(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant matching `selector`, in document order
    pub fn find_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matches(selector, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, selector: &Selector, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if selector.matches(child) {
                found.push(child);
            }
            child.collect_matches(selector, found);
        }
    }

    /// Visits every descendant matching `selector`, returning how many matched
    pub fn for_each_match_mut<F>(&mut self, selector: &Selector, f: &mut F) -> usize
    where
        F: FnMut(&mut Element),
    {
        let mut count = 0;
        for child in &mut self.children {
            if selector.matches(child) {
                f(child);
                count += 1;
            }
            count += child.for_each_match_mut(selector, f);
        }
        count
    }

    pub fn count_matches(&self, selector: &Selector) -> usize {
        self.children
            .iter()
            .map(|child| usize::from(selector.matches(child)) + child.count_matches(selector))
            .sum()
    }

    /// Removes every descendant matching `selector` (and its subtree)
    pub fn remove_matches(&mut self, selector: &Selector) -> usize {
        let before = self.children.len();
        self.children.retain(|child| !selector.matches(child));
        let mut removed = before - self.children.len();
        for child in &mut self.children {
            removed += child.remove_matches(selector);
        }
        removed
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        let text = self.text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    /// Plain-text projection for terminals: one line per text run, image or link
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_outline(&mut lines);
        lines
    }

    fn collect_outline(&self, lines: &mut Vec<String>) {
        let text = self.text.trim();
        match self.tag.as_str() {
            "img" => {
                if let Some(src) = self.attr("src").filter(|s| !s.is_empty()) {
                    lines.push(format!("[image] {}", src));
                }
            }
            "a" => {
                let href = self.attr("href").unwrap_or_default();
                let label = self.text_content();
                if !label.is_empty() && !href.is_empty() {
                    lines.push(format!("{} <{}>", label, href));
                    return;
                }
                if !href.is_empty() && self.children.is_empty() {
                    lines.push(format!("<{}>", href));
                    return;
                }
            }
            _ => {}
        }
        if !text.is_empty() && self.tag != "a" {
            lines.push(text.to_string());
        }
        for child in &self.children {
            child.collect_outline(lines);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if is_void(&self.tag) {
            out.push_str(">");
            return;
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

/// Escapes text for use in HTML content and quoted attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
