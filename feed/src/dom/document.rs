//! Fragments and documents
//!
//! A `Fragment` is a detached list of root elements, the result of cloning a
//! template. A `Document` is the live page the feed view mutates.

use super::element::{Element, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    roots: Vec<Element>,
}

impl Fragment {
    pub fn new(roots: Vec<Element>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Element> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// First element (roots included) matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        for root in &self.roots {
            if selector.matches(root) {
                return Some(root);
            }
            if let Some(found) = root.find(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn select_first_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        for root in &mut self.roots {
            if selector.matches(root) {
                return Some(root);
            }
            if let Some(found) = root.find_mut(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn for_each_match_mut<F>(&mut self, selector: &Selector, f: &mut F) -> usize
    where
        F: FnMut(&mut Element),
    {
        let mut count = 0;
        for root in &mut self.roots {
            if selector.matches(root) {
                f(root);
                count += 1;
            }
            count += root.for_each_match_mut(selector, f);
        }
        count
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            root.write_html(&mut out);
        }
        out
    }

    pub fn outline(&self) -> Vec<String> {
        self.roots.iter().flat_map(Element::outline).collect()
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Self {
            roots: vec![element],
        }
    }
}

/// The live page: a `<body>` whose children the feed view mutates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            body: Element::new("body"),
        }
    }
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Appends the fragment's roots as the last children of `<body>`
    pub fn append(&mut self, fragment: Fragment) {
        self.body.append_children(fragment.into_roots());
    }

    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        self.body.find(selector)
    }

    pub fn select_first_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.body.find_mut(selector)
    }

    pub fn select_all(&self, selector: &Selector) -> Vec<&Element> {
        self.body.find_all(selector)
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.select_first(selector).is_some()
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.body.count_matches(selector)
    }

    /// Removes every element matching `selector`, returning how many went
    pub fn remove_all(&mut self, selector: &Selector) -> usize {
        self.body.remove_matches(selector)
    }

    /// Removes the element with `id`; false when there was none
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        self.remove_all(&Selector::Id(id.to_string())) > 0
    }

    pub fn to_html(&self) -> String {
        self.body.to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_select_includes_roots() {
        let fragment = Fragment::from(Element::new("div").with_id("sentinel"));
        assert!(fragment.select_first(&Selector::parse("#sentinel")).is_some());
    }

    #[test]
    fn fragment_html_concatenates_roots() {
        let fragment = Fragment::new(vec![Element::new("p"), Element::new("hr")]);
        assert_eq!(fragment.to_html(), "<p></p><hr>");
    }

    #[test]
    fn document_append_and_remove() {
        let mut doc = Document::default();
        doc.append(Fragment::from(Element::new("div").with_id("posts-container")));
        doc.append(Fragment::from(Element::new("div").with_id("sentinel")));

        assert!(doc.contains(&Selector::parse("#sentinel")));
        assert_eq!(doc.remove_all(&Selector::parse("#sentinel")), 1);
        assert!(!doc.contains(&Selector::parse("#sentinel")));
        assert!(doc.contains(&Selector::parse("#posts-container")));
    }

    #[test]
    fn document_html() {
        let mut doc = Document::default();
        doc.append(Fragment::from(Element::new("main")));
        assert_eq!(doc.to_html(), "<body><main></main></body>");
    }

    #[test]
    fn select_all_in_document_order() {
        let mut doc = Document::default();
        doc.append(Fragment::from(
            Element::new("div")
                .with_class("post")
                .with_text("one")
                .with_child(Element::new("div").with_class("post").with_text("two")),
        ));
        doc.append(Fragment::from(
            Element::new("div").with_class("post").with_text("three"),
        ));

        let texts: Vec<&str> = doc
            .select_all(&Selector::parse(".post"))
            .into_iter()
            .map(Element::text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn remove_by_id_reports_absence() {
        let mut doc = Document::default();
        doc.append(Fragment::from(Element::new("div").with_id("sentinel")));

        assert!(doc.remove_by_id("sentinel"));
        assert!(!doc.remove_by_id("sentinel"));
    }
}
