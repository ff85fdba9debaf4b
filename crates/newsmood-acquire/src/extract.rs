use crate::normalize;
use newsmood_model::ExtractedText;
use scraper::{Html, Node, Selector};
use std::ops::Deref;

/// Elements whose contents never render as paragraph text.
const INVISIBLE_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "iframe"];

/// Pull readable paragraph text out of a raw HTML body.
///
/// Every `<p>` in document order contributes its visible text, trimmed and
/// whitespace-collapsed; empty paragraphs are dropped and the rest are joined
/// with single spaces. A page with no usable paragraph text yields
/// `ExtractedText::NoContent`.
///
/// Pure: the same input always produces the same output.
pub fn extract(raw_body: &str) -> ExtractedText {
    let document = Html::parse_document(raw_body);
    let p_sel = Selector::parse("p").expect("valid selector");

    let paragraphs: Vec<String> = document
        .select(&p_sel)
        .map(|p| normalize::normalize_text(&collect_visible_text(p.id(), p.tree())))
        .filter(|text| !text.is_empty())
        .collect();

    ExtractedText::from_text(paragraphs.join(" "))
}

/// Collect text under a node, skipping script-like subtrees and turning
/// `<br>` into a space so adjacent lines don't run together.
fn collect_visible_text(node_id: ego_tree::NodeId, tree: &ego_tree::Tree<Node>) -> String {
    let Some(node) = tree.get(node_id) else {
        return String::new();
    };
    let mut text = String::new();

    for child in node.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t.deref()),
            Node::Element(elem) => {
                let tag = elem.name();
                if tag == "br" {
                    text.push(' ');
                } else if !INVISIBLE_TAGS.contains(&tag) {
                    // Inline markup (<a>, <b>, <span>) sits mid-sentence, so no separator
                    text.push_str(&collect_visible_text(child.id(), tree));
                }
            }
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_joins_paragraphs_in_order() {
        let html = r#"
        <html><body>
          <h1>Headline</h1>
          <p>  First paragraph. </p>
          <div><p>Second <b>bold</b> paragraph.</p></div>
          <p>Third<br>line.</p>
        </body></html>
        "#;
        assert_eq!(
            extract(html),
            ExtractedText::Content(
                "First paragraph. Second bold paragraph. Third line.".into()
            )
        );
    }

    #[test]
    fn test_extract_skips_empty_and_invisible() {
        let html = r#"
        <p></p>
        <p>   </p>
        <p>Visible<script>var x = 1;</script> text</p>
        <p><style>.a { color: red }</style></p>
        "#;
        assert_eq!(extract(html), ExtractedText::Content("Visible text".into()));
    }

    #[test]
    fn test_extract_no_paragraphs_is_sentinel() {
        assert_eq!(extract("<html><body><div>Only a div</div></body></html>"), ExtractedText::NoContent);
        assert_eq!(extract(""), ExtractedText::NoContent);
        assert_eq!(extract("not html at all"), ExtractedText::NoContent);
    }

    #[test]
    fn test_extract_decodes_entities_and_normalizes() {
        let html = "<p>Caf&eacute; &amp; cre\u{0300}me&nbsp;br&ucirc;l&eacute;e</p>";
        assert_eq!(extract(html), ExtractedText::Content("Café & crème brûlée".into()));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let html = "<p>One</p><p>Two <i>three</i></p>";
        let first = extract(html);
        for _ in 0..3 {
            assert_eq!(extract(html), first);
        }
    }
}
