use scraper::{ElementRef, Html};

/// Outcome of looking up a class marker in a document.
#[derive(Debug)]
pub enum Selection<'a> {
    None,
    Single(ElementRef<'a>),
    Multiple(usize),
}

impl<'a> Selection<'a> {
    pub fn count(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Single(_) => 1,
            Selection::Multiple(n) => *n,
        }
    }
}

/// Every element that carries all the space-separated classes in `marker`,
/// in document order.
pub fn by_class<'a>(document: &'a Html, marker: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let wanted: Vec<&'a str> = marker.split_whitespace().collect();
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| {
            !wanted.is_empty() && wanted.iter().all(|class| el.value().classes().any(|c| c == *class))
        })
}

/// Look up `marker` and report whether it matched nothing, one element, or
/// several.
pub fn select_one<'a>(document: &'a Html, marker: &'a str) -> Selection<'a> {
    let mut matches = by_class(document, marker);
    match (matches.next(), matches.next()) {
        (None, _) => Selection::None,
        (Some(el), None) => Selection::Single(el),
        (Some(_), Some(_)) => Selection::Multiple(2 + matches.count()),
    }
}

/// Text content of an element: all descendant text, verbatim.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body>
      <h4 class="type-gamma">Title</h4>
      <a class="link-underline-on" href="/a">A</a>
      <p class="link-underline-on other">B</p>
      <div class="mb-6 flex flex-col gap-12 md:mb-0">body</div>
      <div class="flex flex-col">not body</div>
    </body></html>
    "#;

    #[test]
    fn test_by_class_counts_all_matches() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(by_class(&doc, "link-underline-on").count(), 2);
        assert_eq!(by_class(&doc, "missing").count(), 0);
        assert_eq!(by_class(&doc, "").count(), 0);
    }

    #[test]
    fn test_multi_class_marker_needs_every_class() {
        let doc = Html::parse_document(PAGE);
        let found: Vec<String> = by_class(&doc, "mb-6 flex flex-col gap-12 md:mb-0")
            .map(text_content)
            .collect();
        assert_eq!(found, vec!["body".to_string()]);

        // Class order in the marker doesn't matter.
        assert_eq!(by_class(&doc, "flex-col flex").count(), 2);
    }

    #[test]
    fn test_select_one_outcomes() {
        let doc = Html::parse_document(PAGE);
        assert!(matches!(select_one(&doc, "type-gamma"), Selection::Single(_)));
        assert!(matches!(select_one(&doc, "link-underline-on"), Selection::Multiple(2)));
        assert!(matches!(select_one(&doc, "type-beta"), Selection::None));
        assert_eq!(select_one(&doc, "flex").count(), 2);
    }

    #[test]
    fn test_text_content_is_verbatim() {
        let doc = Html::parse_document(r#"<div class="x">  line one<br>
<span>line</span> two  </div>"#);
        let el = by_class(&doc, "x").next().unwrap();
        assert_eq!(text_content(el), "  line one\nline two  ");
    }
}
