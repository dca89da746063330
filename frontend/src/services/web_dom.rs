use progress_ring::{Dom, Result, RingError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

/// [`Dom`] backed by the page's live document
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDom;

impl Dom for WebDom {
    type Node = Element;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
        document()?.query_selector(selector).map_err(js_error)
    }

    fn query_within(&self, root: &Element, selector: &str) -> Result<Option<Element>> {
        root.query_selector(selector).map_err(js_error)
    }

    fn set_inner_html(&self, node: &Element, html: &str) -> Result<()> {
        node.set_inner_html(html);
        Ok(())
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<()> {
        style_of(node)?.set_property(property, value).map_err(js_error)
    }

    fn set_text(&self, node: &Element, text: &str) -> Result<()> {
        node.set_text_content(Some(text));
        Ok(())
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| RingError::Dom("No document available".to_string()))
}

// Both HTML and SVG elements carry an inline style declaration
fn style_of(node: &Element) -> Result<CssStyleDeclaration> {
    if let Some(element) = node.dyn_ref::<HtmlElement>() {
        return Ok(element.style());
    }
    if let Some(element) = node.dyn_ref::<SvgElement>() {
        return Ok(element.style());
    }
    Err(RingError::Dom(format!(
        "<{}> has no inline style",
        node.tag_name().to_lowercase()
    )))
}

fn js_error(err: JsValue) -> RingError {
    RingError::Dom(format!("{:?}", err))
}
