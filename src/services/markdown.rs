//! Markdown rendering for article bodies
//!
//! Article bodies are authored either as Markdown or as HTML from the store's
//! rich text editor. Raw HTML passes through pulldown-cmark untouched, so one
//! renderer handles both.
//!
//! # Example
//!
//! ```
//! use techstore::services::markdown::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render("# Bienvenue\n\nDu **gras**.");
//! assert!(html.contains("<h1>"));
//! assert!(html.contains("<strong>"));
//! ```

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Default length of plain-text excerpts, in characters
pub const EXCERPT_CHARS: usize = 180;

/// Stateless Markdown to HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new renderer
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        options
    }

    /// Renders Markdown text to HTML.
    ///
    /// Fenced code blocks get a `language-<lang>` class.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let events = self.process_events(parser);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Plain-text excerpt of at most `max_chars` characters.
    ///
    /// Markup is dropped, raw HTML keeps its text content; a cut excerpt ends
    /// with `…` on a word boundary.
    pub fn excerpt(&self, markdown: &str, max_chars: usize) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for event in Parser::new_ext(markdown, Self::options()) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    push_html_text(&raw, &mut in_tag, &mut text)
                }
                Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => {
                    text.push(' ')
                }
                Event::End(TagEnd::Heading(_)) => text.push(' '),
                _ => {}
            }
        }

        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.chars().count() <= max_chars {
            return text;
        }

        let cut: String = text.chars().take(max_chars).collect();
        let cut = match cut.rfind(' ') {
            Some(pos) if pos > 0 => &cut[..pos],
            _ => cut.as_str(),
        };
        format!("{}…", cut.trim_end_matches(|c: char| c.is_ascii_punctuation()))
    }

    fn process_events<'a>(&self, parser: Parser<'a>) -> Vec<Event<'a>> {
        let mut events = Vec::new();
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_content.clear();
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let block = match code_lang.take() {
                        Some(lang) => format!(
                            "<pre><code class=\"language-{}\">{}</code></pre>\n",
                            html_escape(&lang),
                            html_escape(&code_content)
                        ),
                        None => format!("<pre><code>{}</code></pre>\n", html_escape(&code_content)),
                    };
                    events.push(Event::Html(block.into()));
                }
                Event::Text(text) if in_code_block => code_content.push_str(&text),
                _ => events.push(event),
            }
        }

        events
    }
}

/// Append the text of an HTML fragment, tags removed. `in_tag` carries an
/// unterminated tag over to the next fragment.
fn push_html_text(fragment: &str, in_tag: &mut bool, out: &mut String) {
    let mut text = String::new();
    for c in fragment.chars() {
        match c {
            '<' => {
                *in_tag = true;
                text.push(' ');
            }
            '>' if *in_tag => *in_tag = false,
            _ if *in_tag => {}
            _ => text.push(c),
        }
    }
    out.push_str(&decode_entities(&text));
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Escapes HTML special characters in a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
