use crate::error::ParseError;
use crate::select;
use scraper::Html;
use stanza_model::LinkCandidate;

/// Links pulled from a poet's page, in document order. Consumed once.
#[derive(Debug)]
pub struct PoemLinks(std::vec::IntoIter<LinkCandidate>);

impl Iterator for PoemLinks {
    type Item = LinkCandidate;

    fn next(&mut self) -> Option<LinkCandidate> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for PoemLinks {}

/// Extract every element carrying `link_marker` from a poet's page.
///
/// No filtering happens here: navigation links, magazine links and poem
/// links all come back. A page with no matches at all means the markup
/// changed, so that is an error rather than an empty result.
pub fn extract_poem_links(html: &str, link_marker: &str) -> Result<PoemLinks, ParseError> {
    let document = Html::parse_document(html);

    let links: Vec<LinkCandidate> = select::by_class(&document, link_marker)
        .map(|el| LinkCandidate {
            href: el.value().attr("href").unwrap_or_default().to_string(),
            text: select::text_content(el),
        })
        .collect();

    if links.is_empty() {
        return Err(ParseError::NoLinks {
            marker: link_marker.to_string(),
        });
    }

    tracing::debug!(links = links.len(), "Extracted link candidates");
    Ok(PoemLinks(links.into_iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "link-underline-on";

    #[test]
    fn test_extract_all_marked_links() {
        let html = r#"
        <html><body>
          <nav><a href="/poets">Poets</a></nav>
          <div class="bio">
            <p>Whitman's best known poems include
              <a class="link-underline-on" href="/poems/45470/o-captain-my-captain">O Captain! My Captain!</a>,
              <a class="link-underline-on" href="/poetrymagazine/poems/29538/a-noiseless-patient-spider">A Noiseless Patient Spider</a>
              and the collection
              <a class="link-underline-on" href="/poets/walt-whitman/leaves">Leaves of <em>Grass</em></a>.
            </p>
          </div>
        </body></html>
        "#;

        let links = extract_poem_links(html, MARKER).unwrap();
        assert_eq!(links.len(), 3);

        let links: Vec<LinkCandidate> = links.collect();
        assert_eq!(links[0].href, "/poems/45470/o-captain-my-captain");
        assert_eq!(links[0].text, "O Captain! My Captain!");
        assert_eq!(links[1].href, "/poetrymagazine/poems/29538/a-noiseless-patient-spider");
        assert_eq!(links[2].text, "Leaves of Grass");
    }

    #[test]
    fn test_missing_href_is_empty() {
        let html = r#"<span class="link-underline-on">no target</span>"#;
        let links: Vec<LinkCandidate> = extract_poem_links(html, MARKER).unwrap().collect();
        assert_eq!(links, vec![LinkCandidate { href: String::new(), text: "no target".into() }]);
    }

    #[test]
    fn test_no_links_is_error() {
        let html = r#"<html><body><a href="/poems/1/x">unmarked</a></body></html>"#;
        let err = extract_poem_links(html, MARKER).unwrap_err();
        assert_eq!(err, ParseError::NoLinks { marker: MARKER.into() });
    }
}
