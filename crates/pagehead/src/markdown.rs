//! Markdown to HTML rendering for page bodies

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::escape::escape_html;

/// Render a Markdown page body to HTML.
///
/// Tables and strikethrough are enabled. Fenced code blocks are emitted with
/// a `language-*` class so a stylesheet or client-side highlighter can pick
/// them up.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = CodeBlockLabeler::new(Parser::new_ext(markdown, options));

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Iterator adapter that collapses each code block into a single HTML event
/// carrying the fence language as a CSS class.
struct CodeBlockLabeler<I> {
    inner: I,
    in_code_block: bool,
    code_lang: Option<String>,
    code_buffer: String,
}

impl<I> CodeBlockLabeler<I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            in_code_block: false,
            code_lang: None,
            code_buffer: String::new(),
        }
    }

    fn labeled_block(&self) -> String {
        let lang_class = self
            .code_lang
            .as_deref()
            .map(|lang| format!(" class=\"language-{lang}\""))
            .unwrap_or_default();
        format!(
            "<pre><code{}>{}</code></pre>",
            lang_class,
            escape_html(&self.code_buffer)
        )
    }
}

impl<'a, I> Iterator for CodeBlockLabeler<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.inner.next()?;

            match &event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    self.in_code_block = true;
                    self.code_buffer.clear();
                    self.code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            Some(lang.to_string())
                        }
                        _ => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    self.in_code_block = false;
                    return Some(Event::Html(self.labeled_block().into()));
                }
                Event::Text(text) if self.in_code_block => {
                    self.code_buffer.push_str(text);
                }
                _ => return Some(event),
            }
        }
    }
}
