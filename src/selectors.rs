use scraper::{ElementRef, Html, Selector};

// Source markup is not fully known in advance, so every field is extracted
// through an ordered chain of candidate selectors. First non-empty match
// wins; a chain that matches nothing is "field absent", never an error.

/// Returns the listing fragments of a document: the union of every
/// candidate selector's matches, in document order. A page can mix markup
/// shapes, so no candidate may shadow another.
pub fn select_fragments<'a>(document: &'a Html, candidates: &[&str]) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(&candidates.join(", ")).unwrap();
    document.select(&selector).collect()
}

/// First candidate selector that yields non-empty trimmed text within the
/// fragment.
pub fn first_text(fragment: &ElementRef, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        let selector = Selector::parse(candidate).unwrap();
        for element in fragment.select(&selector) {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// First candidate selector that yields a non-empty attribute value within
/// the fragment.
pub fn first_attr(fragment: &ElementRef, candidates: &[&str], attr: &str) -> Option<String> {
    for candidate in candidates {
        let selector = Selector::parse(candidate).unwrap();
        for element in fragment.select(&selector) {
            if let Some(value) = element.value().attr(attr) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_of(html: &'static str) -> Html {
        Html::parse_fragment(html)
    }

    #[test]
    fn later_candidate_wins_when_earlier_is_empty() {
        let doc = fragment_of(
            r#"<div class="item"><span class="title"></span><h3>Hill Repeats</h3></div>"#,
        );
        let fragments = select_fragments(&doc, &[".item"]);
        let text = first_text(&fragments[0], &[".title", "h3"]);
        assert_eq!(text.as_deref(), Some("Hill Repeats"));
    }

    #[test]
    fn fragment_candidates_union_in_document_order() {
        let doc = fragment_of(
            r#"<div class="event-row">a</div><div class="event-item">b</div>"#,
        );
        let fragments = select_fragments(&doc, &[".event-item", ".event-row"]);
        assert_eq!(fragments.len(), 2);
        let texts: Vec<String> = fragments.iter().map(|f| f.text().collect()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn missing_attr_is_none_not_error() {
        let doc = fragment_of(r#"<div class="item"><a>no href</a></div>"#);
        let fragments = select_fragments(&doc, &[".item"]);
        assert!(first_attr(&fragments[0], &["a"], "href").is_none());
    }
}
