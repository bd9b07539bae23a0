//! XML navigation helpers for roxmltree nodes.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// WXR exports prefix elements (`wp:post_id`, `dc:creator`,
/// `content:encoded`); bindings match on the local part only.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr::xml::get_tag_name;
///
/// let doc = Document::parse(r#"<rss xmlns:wp="urn:wp"><wp:post_id/></rss>"#).unwrap();
/// let child = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(child), "post_id");
/// ```
#[must_use]
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Collect the character data directly inside an element.
///
/// Text and CDATA children are concatenated in document order; text
/// inside nested elements is excluded.
#[must_use]
pub fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
