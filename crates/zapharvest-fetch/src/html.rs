use scraper::{Html, Node};

const HIDDEN_ELEMENTS: [&str; 5] = ["head", "script", "style", "noscript", "template"];

pub fn visible_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }
        parts.extend(text.split_whitespace());
    }

    parts.join(" ")
}

pub fn compose_page_content(markup: &str) -> String {
    let text = visible_text(markup);
    let mut content = String::with_capacity(text.len() + 1 + markup.len());
    content.push_str(&text);
    content.push(' ');
    content.push_str(markup);
    content
}

#[cfg(test)]
mod tests {
    use super::{compose_page_content, visible_text};

    #[test]
    fn visible_text_skips_scripts_and_head() {
        let html = "<html><head><title>Loja</title><style>.a{}</style></head>\
                    <body><p>Ligue  agora:</p><p>+55 (11) 91234-5678</p>\
                    <script>var tel = '5521987654321';</script></body></html>";
        assert_eq!(visible_text(html), "Ligue agora: +55 (11) 91234-5678");
    }

    #[test]
    fn visible_text_of_plain_text_is_the_text() {
        assert_eq!(visible_text("fale com 551198887766"), "fale com 551198887766");
    }

    #[test]
    fn compose_keeps_markup_after_text() {
        let html = r#"<a href="https://wa.me/5521987654321">WhatsApp</a>"#;
        let content = compose_page_content(html);
        assert!(content.starts_with("WhatsApp "));
        assert!(content.ends_with(html));
    }
}
