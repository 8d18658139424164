//! Minimal document tree the pipeline renders into.
//!
//! Elements are built with chained builders, mutated in place by the language
//! selector and the renderer, and serialized to HTML once per response.

use std::fmt::Write as _;

use askama_escape::{escape, Html};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Escapes each line of `text` and joins the lines with `separator` markup.
pub fn html_lines(text: &str, separator: &str) -> String {
    text.split('\n')
        .map(|line| escape(line, Html).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-escaped markup, written out verbatim.
    Html(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Adds one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn element_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn element_children_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.children = vec![Node::Html(html.into())];
    }

    /// Drops every existing child before installing the new ones.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Concatenated text of this subtree. Raw HTML nodes are included as-is.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) | Node::Html(text) => out.push_str(text),
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.element_children().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.element_children_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Depth-first, pre-order visit of this element and its descendants.
    pub fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        visit(self);
        for child in self.element_children_mut() {
            child.walk_mut(visit);
        }
    }

    pub fn select<'a>(&'a self, matches: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if matches(self) {
            out.push(self);
        }
        for child in self.element_children() {
            child.select(matches, out);
        }
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, Html));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" "), Html));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => {
                    let _ = write!(out, "{}", escape(text, Html));
                }
                Node::Html(html) => out.push_str(html),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub lang: String,
    pub dir: String,
    pub body: Element,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            lang: String::new(),
            dir: "ltr".to_string(),
            body,
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn for_each_element_mut(&mut self, mut visit: impl FnMut(&mut Element)) {
        self.body.walk_mut(&mut visit);
    }

    pub fn select(&self, matches: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        self.body.select(&matches, &mut out);
        out
    }

    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        self.select(|el| el.has_class(class))
    }

    pub fn to_html(&self) -> String {
        self.body.to_html()
    }
}
