//! # DOM Capability
//!
//! The ring never touches a document directly. Everything it needs from the
//! host goes through [`Dom`], so the merge/render/animate sequence can run
//! against a browser document or an in-memory fake alike.

use crate::error::Result;
use crate::style::StyleMap;

/// Trait defining the DOM operations a ring needs from its host
pub trait Dom {
    /// Handle to an element; cheap to clone
    type Node: Clone + 'static;

    /// First element in the document matching `selector`
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>>;

    /// First descendant of `root` matching `selector`
    fn query_within(&self, root: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    /// Replace all content of `node` with parsed `html`
    fn set_inner_html(&self, node: &Self::Node, html: &str) -> Result<()>;

    /// Assign one inline style property (kebab-case name)
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<()>;

    /// Replace the text content of `node`
    fn set_text(&self, node: &Self::Node, text: &str) -> Result<()>;

    /// Assign every declaration of `styles`, in order
    fn apply_styles(&self, node: &Self::Node, styles: &StyleMap) -> Result<()> {
        for (property, value) in styles.iter() {
            self.set_style(node, property, value)?;
        }
        Ok(())
    }
}
