//! In-memory stand-ins for the host capabilities, for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::{Animator, FrameCallback, Tween};
use crate::dom::Dom;
use crate::error::{Result, RingError};
use crate::style::StyleMap;

#[derive(Debug, Default)]
struct FakeNode {
    classes: Vec<String>,
    attached: bool,
    children: Vec<usize>,
    inner_html: String,
    text: String,
    styles: StyleMap,
}

#[derive(Debug, Default)]
struct FakeDocument {
    nodes: Vec<FakeNode>,
    mutations: usize,
    dropped_classes: Vec<String>,
}

impl FakeDocument {
    fn matches(&self, id: usize, selector: &str) -> Result<bool> {
        let class = selector
            .strip_prefix('.')
            .ok_or_else(|| RingError::Dom(format!("FakeDom only supports class selectors, got '{}'", selector)))?;
        let node = &self.nodes[id];
        Ok(node.attached && node.classes.iter().any(|c| c == class))
    }

    fn descendants(&self, root: usize) -> Vec<usize> {
        let mut found = Vec::new();
        let mut stack: Vec<usize> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            found.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        found
    }

    fn detach_children(&mut self, node: usize) {
        for id in self.descendants(node) {
            self.nodes[id].attached = false;
        }
        self.nodes[node].children.clear();
    }

    fn matching(&self, selector: &str) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&id| self.matches(id, selector).unwrap_or(false))
            .collect()
    }
}

/// A document made of class-tagged nodes.
///
/// `set_inner_html` scans the markup for elements carrying a `class`
/// attribute and creates one child per element, with the text up to the
/// next tag as its content. Only `.class` selectors are understood.
#[derive(Debug, Clone, Default)]
pub struct FakeDom {
    doc: Rc<RefCell<FakeDocument>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element with one class. Not counted as a mutation.
    pub fn add_root(&self, class: &str) -> usize {
        let mut doc = self.doc.borrow_mut();
        doc.nodes.push(FakeNode {
            classes: vec![class.to_string()],
            attached: true,
            ..Default::default()
        });
        doc.nodes.len() - 1
    }

    /// Elements with this class are silently left out of future inserts
    pub fn drop_class_on_insert(&self, class: &str) {
        self.doc.borrow_mut().dropped_classes.push(class.to_string());
    }

    pub fn mutation_count(&self) -> usize {
        self.doc.borrow().mutations
    }

    pub fn count(&self, selector: &str) -> usize {
        self.doc.borrow().matching(selector).len()
    }

    pub fn text_of(&self, selector: &str) -> Option<String> {
        self.texts_of(selector).into_iter().next()
    }

    pub fn texts_of(&self, selector: &str) -> Vec<String> {
        let doc = self.doc.borrow();
        doc.matching(selector)
            .into_iter()
            .map(|id| doc.nodes[id].text.clone())
            .collect()
    }

    pub fn inner_html_of(&self, selector: &str) -> Option<String> {
        let doc = self.doc.borrow();
        let id = doc.matching(selector).into_iter().next()?;
        Some(doc.nodes[id].inner_html.clone())
    }

    pub fn style_of(&self, selector: &str, property: &str) -> Option<String> {
        let doc = self.doc.borrow();
        let id = doc.matching(selector).into_iter().next()?;
        doc.nodes[id].styles.get(property).map(str::to_string)
    }
}

impl Dom for FakeDom {
    type Node = usize;

    fn query_selector(&self, selector: &str) -> Result<Option<usize>> {
        let doc = self.doc.borrow();
        for id in 0..doc.nodes.len() {
            if doc.matches(id, selector)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn query_within(&self, root: &usize, selector: &str) -> Result<Option<usize>> {
        let doc = self.doc.borrow();
        for id in doc.descendants(*root) {
            if doc.matches(id, selector)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn set_inner_html(&self, node: &usize, html: &str) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        doc.mutations += 1;
        doc.detach_children(*node);
        doc.nodes[*node].inner_html = html.to_string();
        doc.nodes[*node].text.clear();

        for element in scan_elements(html) {
            if doc.dropped_classes.contains(&element.class) {
                continue;
            }
            doc.nodes.push(FakeNode {
                classes: vec![element.class],
                attached: true,
                text: element.text,
                ..Default::default()
            });
            let id = doc.nodes.len() - 1;
            doc.nodes[*node].children.push(id);
        }
        Ok(())
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        doc.mutations += 1;
        doc.nodes[*node].styles.set(property, value);
        Ok(())
    }

    fn set_text(&self, node: &usize, text: &str) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        doc.mutations += 1;
        doc.nodes[*node].text = text.to_string();
        Ok(())
    }
}

struct ScannedElement {
    class: String,
    text: String,
}

fn scan_elements(html: &str) -> Vec<ScannedElement> {
    let mut elements = Vec::new();
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else { break };
        let tag = &after[..close];
        let body = &after[close + 1..];
        rest = body;

        if tag.starts_with('/') {
            continue;
        }
        let Some(class_start) = tag.find("class=\"") else { continue };
        let class_value = &tag[class_start + 7..];
        let Some(class_end) = class_value.find('"') else { continue };

        let text = if tag.ends_with('/') {
            String::new()
        } else {
            body[..body.find('<').unwrap_or(body.len())].to_string()
        };
        elements.push(ScannedElement {
            class: class_value[..class_end].to_string(),
            text,
        });
    }
    elements
}

/// Records tweens without running them; frames are fired by hand
#[derive(Clone, Default)]
pub struct RecordingAnimator {
    started: Rc<RefCell<Vec<(Tween, FrameCallback)>>>,
}

impl RecordingAnimator {
    pub fn tweens(&self) -> Vec<Tween> {
        self.started.borrow().iter().map(|(tween, _)| *tween).collect()
    }

    /// Deliver `value` to the frame callback of the `index`-th animation
    pub fn run_frame(&self, index: usize, value: f64) {
        let mut started = self.started.borrow_mut();
        let (_, on_frame) = &mut started[index];
        on_frame(value);
    }
}

impl Animator for RecordingAnimator {
    fn animate(&self, tween: Tween, on_frame: FrameCallback) {
        self.started.borrow_mut().push((tween, on_frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_elements() {
        let found = scan_elements(
            r#"<svg width="1"><circle class="circle" r="2"/></svg><div class="svg-number">75</div>"#,
        );
        let summary: Vec<(&str, &str)> = found
            .iter()
            .map(|e| (e.class.as_str(), e.text.as_str()))
            .collect();
        assert_eq!(summary, vec![("circle", ""), ("svg-number", "75")]);
    }

    #[test]
    fn test_unsupported_selector_is_a_dom_error() {
        let dom = FakeDom::new();
        dom.add_root("box");
        assert!(matches!(dom.query_selector("#box"), Err(RingError::Dom(_))));
    }
}
