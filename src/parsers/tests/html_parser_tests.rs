use crate::parsers::html;
use crate::results::Link;
use scraper::Html;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let doc = Html::parse_document(r#"<a href="/x">Home</a><a>NoHref</a>"#);
        let links = html::extract_links(&doc);
        assert_eq!(links, vec![Link::new("Home", "/x")]);
    }

    #[test]
    fn test_links_keep_document_order() {
        let doc = Html::parse_document(
            r#"<html><body>
                <nav><a href="/b">B</a></nav>
                <p>Some text <a href="https://example.com/a">A</a></p>
                <footer><a href="mailto:x@example.com">Mail</a></footer>
            </body></html>"#,
        );
        let urls: Vec<_> = html::extract_links(&doc)
            .into_iter()
            .map(|l| l.url)
            .collect();
        assert_eq!(
            urls,
            vec!["/b", "https://example.com/a", "mailto:x@example.com"]
        );
    }

    #[test]
    fn test_whitespace_only_text_becomes_empty() {
        let doc = Html::parse_document("<a href=\"/img\">  \n\t </a>");
        let links = html::extract_links(&doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "");
        assert_eq!(links[0].url, "/img");
    }

    #[test]
    fn test_link_text_includes_nested_elements() {
        let doc = Html::parse_document("<a href=\"/docs\">  Read <b>the</b> docs </a>");
        let links = html::extract_links(&doc);
        assert_eq!(links[0].text, "Read the docs");
    }

    #[test]
    fn test_empty_href_is_still_a_link() {
        let doc = Html::parse_document("<a href=\"\">Self</a>");
        let links = html::extract_links(&doc);
        assert_eq!(links, vec![Link::new("Self", "")]);
    }

    #[test]
    fn test_text_skips_scripts_and_styles() {
        let doc = Html::parse_document(
            "<html><head><title>Title</title><style>p { color: red }</style></head>\
             <body><p>Hello</p><script>var x = 1;</script><noscript>Enable JS</noscript>\
             <p>world</p></body></html>",
        );
        assert_eq!(html::extract_text(&doc), "Title Hello world");
    }

    #[test]
    fn test_text_separates_adjacent_blocks() {
        let doc = Html::parse_document("<div>one</div><div>two</div>");
        assert_eq!(html::extract_text(&doc), "one two");
    }

    #[test]
    fn test_inline_elements_do_not_split_words() {
        let doc = Html::parse_document(
            "<p>Java<b>Script</b> and Type<i>Script</i><span>!</span></p>",
        );
        assert_eq!(html::extract_text(&doc), "JavaScript and TypeScript!");
    }

    #[test]
    fn test_line_breaks_and_list_items_separate_words() {
        let doc = Html::parse_document("<ul><li>one</li><li>two</li></ul>three<br>four");
        assert_eq!(html::extract_text(&doc), "one two three four");
    }

    #[test]
    fn test_text_of_empty_document_is_empty() {
        let doc = Html::parse_document("");
        assert_eq!(html::extract_text(&doc), "");
    }
}
